//! A terminal chat client, reading `CHATPAD_API_URL` for the service.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::pin::pin;
use std::time::Duration;

use chatpad::core::conversation::{Message, Sender};
use chatpad::{Command, Flow, SessionBuilder, read_line};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, BufReader};
use tokio::select;
use tokio::time::sleep;

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let session = match SessionBuilder::from_env() {
        Ok(builder) => builder.build(),
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    info!("chatting with {}", session.base_url());

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    println!("{}", "Chatbot".bright_cyan().bold());
    println!("{}", "Type /help for commands.".dimmed());

    let mut stdin = BufReader::new(io::stdin());
    let mut rendered = 0;
    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line(&mut stdin).await else {
            break;
        };
        let command = match Command::parse(&line) {
            Ok(Command::Help) => {
                println!("{}", Command::HELP.dimmed());
                continue;
            }
            Ok(command) => command,
            Err(err) => {
                println!("{}", err.bright_red());
                continue;
            }
        };

        // No input is read until the command completes, the spinner runs
        // while the request is in flight.
        let mut run = pin!(session.run(command));
        let mut progress_bar: Option<ProgressBar> = None;
        let result = loop {
            let sleep = sleep(Duration::from_millis(100));
            select! {
                result = &mut run => break result,
                _ = sleep => {
                    if session.controller().is_busy() {
                        progress_bar
                            .get_or_insert_with(|| {
                                let progress_bar = ProgressBar::new_spinner();
                                progress_bar.set_style(progress_style.clone());
                                progress_bar.set_message("Sending...");
                                progress_bar
                            })
                            .inc(1);
                    }
                }
            }
        };
        if let Some(progress_bar) = progress_bar {
            progress_bar.finish_and_clear();
        }

        let state = session.controller().state();
        for message in &state.conversation().messages()[rendered..] {
            print_message(message);
        }
        rendered = state.conversation().len();

        match result {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => println!("{}", err.bright_red()),
        }
        if let Some(file) = state.pending_file() {
            println!(
                "{} selected, /upload to send it",
                file.file_name().bright_white()
            );
        }
        if let Some(error) = state.last_error() {
            println!("{}", error.bright_red());
            if !state.draft_text().is_empty() {
                println!("{}", "Press Enter to try again.".dimmed());
            }
        }
    }
}

fn print_message(message: &Message) {
    match message.sender() {
        Sender::User => {
            println!("{}{}", BAR_CHAR.bright_blue(), message.text());
        }
        Sender::Bot => {
            println!(
                "{}🤖 {}",
                BAR_CHAR.bright_cyan(),
                message.text().bright_white()
            );
        }
    }
}
