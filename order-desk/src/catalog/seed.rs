use rust_decimal::Decimal;
use shared::models::{MenuItem, Modifier, ModifierOption};

const CATEGORIES: [&str; 7] = [
    "Hot subs",
    "Seafood",
    "Wraps with fries",
    "Cold subs",
    "Appetizers",
    "Baked dishes",
    "Salads",
];

/// Required size choice, defaulting to Regular
fn size() -> Modifier {
    Modifier::single_choice(
        "size",
        "Size",
        Decimal::ZERO,
        vec![
            ModifierOption::new("Regular", Decimal::ZERO),
            ModifierOption::new("Large", Decimal::new(2, 0)),
            ModifierOption::new("Extra Large", Decimal::new(4, 0)),
        ],
    )
    .required()
    .with_default_option(0)
}

fn extra_cheese() -> Modifier {
    Modifier::toggle("cheese", "Extra Cheese", Decimal::new(150, 2))
}

fn item(
    id: &str,
    name: &str,
    price: Decimal,
    image: &str,
    category: &str,
    modifiers: Vec<Modifier>,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: image.to_string(),
        category: category.to_string(),
        modifiers,
    }
}

pub(super) fn default_menu() -> (Vec<String>, Vec<MenuItem>) {
    let twelve = Decimal::new(1200, 2);
    let items = vec![
        item(
            "1",
            "Chicken Parmigiana",
            twelve,
            "assets/chicken-parmigiana.jpg",
            "Hot subs",
            vec![
                size(),
                extra_cheese(),
                Modifier::toggle("sauce", "Extra Sauce", Decimal::new(75, 2)),
            ],
        ),
        item(
            "2",
            "Meatball Parmigiana",
            twelve,
            "assets/meatball-parmigiana.jpg",
            "Hot subs",
            vec![
                size(),
                extra_cheese(),
                Modifier::toggle("extra-meatballs", "Extra Meatballs", Decimal::new(200, 2)),
            ],
        ),
        item(
            "3",
            "Veal Parmigiana",
            Decimal::new(1300, 2),
            "assets/veal-parmigiana.jpg",
            "Hot subs",
            vec![size(), extra_cheese()],
        ),
        item(
            "4",
            "Sausage Parmigiana",
            twelve,
            "assets/sausage-parmigiana.jpg",
            "Hot subs",
            vec![
                size(),
                Modifier::toggle("peppers", "Add Peppers", Decimal::new(100, 2)),
            ],
        ),
        item(
            "5",
            "Eggplant Parmigiana",
            twelve,
            "assets/eggplant-parmigiana.jpg",
            "Hot subs",
            vec![size(), extra_cheese()],
        ),
        item(
            "6",
            "Shrimp Parmigiana",
            twelve,
            "assets/shrimp-parmigiana.jpg",
            "Seafood",
            vec![
                size(),
                Modifier::toggle("extra-shrimp", "Extra Shrimp", Decimal::new(300, 2)),
            ],
        ),
    ];

    (CATEGORIES.iter().map(|c| c.to_string()).collect(), items)
}
