//! Line-oriented front end
//!
//! Reads one JSON [`DeskIntent`] per stdin line and answers each with one
//! JSON line holding the response and the notifications it produced. The
//! line `bill` prints the active guest's bill as text instead.

use anyhow::Context;
use order_desk::{DeskIntent, DeskView, OrderDesk, setup_environment};
use serde::Serialize;
use shared::error::{ApiResponse, AppError};
use shared::message::Notification;
use std::io::{BufRead, Write};

#[derive(Serialize)]
struct Reply {
    response: ApiResponse<DeskView>,
    notifications: Vec<Notification>,
}

fn main() -> anyhow::Result<()> {
    let config = setup_environment();
    tracing::info!(environment = %config.environment, "Order desk starting");

    let mut desk = OrderDesk::new(config);
    let mut notifications = desk.subscribe();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "{}", serde_json::to_string(&desk.view())?)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "bill" {
            write!(stdout, "{}", desk.print_bill())?;
            stdout.flush()?;
            continue;
        }

        let response = match serde_json::from_str::<DeskIntent>(input) {
            Ok(intent) => match desk.dispatch(intent) {
                Ok(()) => ApiResponse::success(desk.view()),
                Err(e) => AppError::from(e).into(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Malformed intent");
                AppError::invalid_request(format!("Malformed intent: {}", e)).into()
            }
        };

        let mut produced = Vec::new();
        while let Ok(notification) = notifications.try_recv() {
            produced.push(notification);
        }

        let reply = Reply {
            response,
            notifications: produced,
        };
        writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
        stdout.flush()?;
    }

    tracing::info!("Input closed, order desk stopping");
    Ok(())
}
