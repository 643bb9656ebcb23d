use std::path::PathBuf;

use anyhow::Context;
use feedback_engine::{labels, mount, Element, FormConfig, Role, Screen, UserEvent};
use feedback_logging::{feedback_info, feedback_warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::config::{try_load_config, CONFIG_FILENAME};
use super::logging;
use super::ui::render::{render_text, status_line};

const HELP: &str = "commands: name <text> | message <text> | clear name|message | submit | show | debug | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldArg {
    Name,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConsoleCommand {
    Type { field: FieldArg, text: String },
    Clear(FieldArg),
    Submit,
    Show,
    Debug,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    let (config, config_error) = match try_load_config(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (FormConfig::default(), Some(err)),
    };
    logging::initialize(config.log_destination);
    if let Some(err) = config_error {
        feedback_warn!("{}; using defaults", err);
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(run_session(
        config,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    ))
}

async fn run_session<R, W>(config: FormConfig, input: R, mut out: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let form = mount(config);
    let screen = form.screen();
    let user = form.user();
    let mut renders = screen.subscribe();
    let mut shown: Option<String> = None;

    write_out(&mut out, &format!("{HELP}\n")).await?;
    write_out(&mut out, &render_text(&screen.document())).await?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(command) = parse_command(&line) else {
                    write_out(&mut out, &format!("{HELP}\n")).await?;
                    continue;
                };
                if command == ConsoleCommand::Quit {
                    break;
                }
                let text = run_command(&screen, &user, command).await?;
                write_out(&mut out, &text).await?;
            }
            changed = renders.changed() => {
                if changed.is_err() {
                    break;
                }
                // Print the confirmation once, when it first appears.
                let current = status_line(&renders.borrow_and_update());
                if current != shown {
                    if let Some(line) = &current {
                        write_out(&mut out, &format!("* {line}\n")).await?;
                    }
                    shown = current;
                }
            }
        }
    }

    form.unmount().await;
    feedback_info!("session ended");
    Ok(())
}

/// Executes one command and returns what to print.
async fn run_command(
    screen: &Screen,
    user: &UserEvent,
    command: ConsoleCommand,
) -> anyhow::Result<String> {
    let text = match command {
        ConsoleCommand::Type { field, text } => {
            user.type_text(&field_element(screen, field)?, &text).await?;
            render_text(&screen.document())
        }
        ConsoleCommand::Clear(field) => {
            user.clear(&field_element(screen, field)?).await?;
            render_text(&screen.document())
        }
        ConsoleCommand::Submit => {
            let submit = screen.get_by_role(Role::Button, labels::SUBMIT)?;
            user.click(&submit).await?;
            String::new()
        }
        ConsoleCommand::Show => render_text(&screen.document()),
        ConsoleCommand::Debug => format!("{}\n", screen.debug()?),
        ConsoleCommand::Quit => String::new(),
    };
    Ok(text)
}

async fn write_out<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await
}

fn field_element(screen: &Screen, field: FieldArg) -> anyhow::Result<Element> {
    let placeholder = match field {
        FieldArg::Name => labels::NAME_PLACEHOLDER,
        FieldArg::Message => labels::MESSAGE_PLACEHOLDER,
    };
    Ok(screen.get_by_placeholder_text(placeholder)?)
}

fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line.trim(), None),
    };
    match (word, rest) {
        ("name", Some(text)) => Some(ConsoleCommand::Type {
            field: FieldArg::Name,
            text: text.to_string(),
        }),
        ("message", Some(text)) => Some(ConsoleCommand::Type {
            field: FieldArg::Message,
            text: text.to_string(),
        }),
        ("clear", Some(target)) => match target.trim() {
            "name" => Some(ConsoleCommand::Clear(FieldArg::Name)),
            "message" => Some(ConsoleCommand::Clear(FieldArg::Message)),
            _ => None,
        },
        ("submit", None) => Some(ConsoleCommand::Submit),
        ("show", None) => Some(ConsoleCommand::Show),
        ("debug", None) => Some(ConsoleCommand::Debug),
        ("quit" | "exit", None) => Some(ConsoleCommand::Quit),
        _ => None,
    }
}
