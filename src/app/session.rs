//! Line-driven interactive session.
//!
//! Each stdin line is one UI event; autoplay ticks arrive from a timer task.
//! Both are handled on this task, so every event sees the state left by the
//! previous one.

use crate::adapters::TextRegion;
use crate::core::carousel::spawn_autoplay;
use crate::core::site::Site;
use crate::core::state::UiEvent;
use crate::core::{SelectionControls, Storage};
use crate::domain::model::{ClickTarget, ModalId};
use crate::utils::error::Result;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

pub const HELP: &str = "\
commands:
  category <name>         select a menu tab
  filter <tag>            toggle a filter chip
  theme                   toggle light/dark
  next | prev             move the testimonial carousel
  nav | link              toggle the mobile menu / follow a nav link
  scroll <y>              report the scroll offset
  order                   open the order-online modal
  close <reservation|order>
  click <reservation|order|elsewhere>
  set <field> <value>     edit the reservation draft
  submit                  send the reservation
  dismiss                 clear the alert
  show | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Event(UiEvent),
    Submit,
    Show,
    Help,
    Quit,
}

fn modal_id(name: &str) -> std::result::Result<ModalId, String> {
    match name {
        "reservation" => Ok(ModalId::Reservation),
        "order" => Ok(ModalId::Order),
        other => Err(format!("unknown modal '{}'", other)),
    }
}

pub fn parse_command(line: &str) -> std::result::Result<SessionCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let needs_arg = |what: &str| -> std::result::Result<String, String> {
        if rest.is_empty() {
            Err(format!("'{}' needs {}", word, what))
        } else {
            Ok(rest.to_string())
        }
    };

    let event = match word {
        "category" | "tab" => UiEvent::SelectCategory(needs_arg("a category")?),
        "filter" => UiEvent::ToggleFilter(needs_arg("a tag")?),
        "theme" => UiEvent::ToggleTheme,
        "next" => UiEvent::NextSlide,
        "prev" => UiEvent::PrevSlide,
        "nav" => UiEvent::ToggleNav,
        "link" => UiEvent::NavLinkClicked,
        "scroll" => {
            let y = needs_arg("an offset")?;
            UiEvent::Scrolled(y.parse().map_err(|_| format!("bad offset '{}'", y))?)
        }
        "order" => UiEvent::OpenOrder,
        "close" => UiEvent::CloseModal(modal_id(&needs_arg("a modal")?)?),
        "click" => match rest {
            "elsewhere" | "" => UiEvent::WindowClick(ClickTarget::Elsewhere),
            name => UiEvent::WindowClick(ClickTarget::Backdrop(modal_id(name)?)),
        },
        "set" => {
            let args = needs_arg("a field and value")?;
            let (field, value) = args
                .split_once(char::is_whitespace)
                .map(|(f, v)| (f.to_string(), v.trim().to_string()))
                .unwrap_or((args.clone(), String::new()));
            UiEvent::EditReservation { field, value }
        }
        "dismiss" => UiEvent::DismissAlert,
        "submit" => return Ok(SessionCommand::Submit),
        "show" | "" => return Ok(SessionCommand::Show),
        "help" | "?" => return Ok(SessionCommand::Help),
        "quit" | "exit" => return Ok(SessionCommand::Quit),
        other => return Err(format!("unknown command '{}'", other)),
    };
    Ok(SessionCommand::Event(event))
}

/// Human-readable snapshot of the page.
pub fn describe<S: Storage>(site: &Site<S, TextRegion>) -> String {
    let state = site.state();
    let mut out = Vec::new();

    out.push(format!(
        "theme: {} (toggle shows {})",
        state.theme,
        state.theme.toggle_icon()
    ));
    out.push(format!(
        "nav: {} [{}], navbar padding {}, shadow {}",
        if state.nav.is_open() { "open" } else { "closed" },
        state.nav.toggle_icon(),
        state.navbar.padding(),
        state.navbar.box_shadow()
    ));
    if let Some(t) = state.carousel.current() {
        out.push(format!(
            "testimonial {}/{}: \"{}\" - {} ({})",
            state.carousel.current_index() + 1,
            state.carousel.len(),
            t.text,
            t.author,
            state.carousel.track_transform()
        ));
    }

    let filters: Vec<String> = state.menu.active_filters().into_iter().collect();
    out.push(format!(
        "menu: {} | filters: {}",
        state.menu.active_category(),
        if filters.is_empty() {
            "none".to_string()
        } else {
            filters.join(", ")
        }
    ));
    for line in site.region().lines() {
        out.push(format!("  {}", line));
    }

    for (id, name) in [(ModalId::Reservation, "reservation"), (ModalId::Order, "order")] {
        if state.modals.is_shown(id) {
            out.push(format!("modal open: {}", name));
        }
    }
    if let Some(alert) = &state.alert {
        out.push(format!("alert: {}", alert));
    }
    out.push(format!("booking button: {}", state.booking.label()));

    out.join("\n")
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

pub async fn run_session<S, In, Out>(
    site: &mut Site<S, TextRegion>,
    input: In,
    mut output: Out,
    autoplay_period: Duration,
) -> Result<()>
where
    S: Storage,
    In: AsyncBufRead + Unpin,
    Out: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::channel(8);
    let autoplay = spawn_autoplay(autoplay_period, tx, || UiEvent::AutoplayTick);
    let mut lines = input.lines();

    emit(&mut output, &describe(site)).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(SessionCommand::Quit) => break,
                    Ok(SessionCommand::Help) => emit(&mut output, HELP).await?,
                    Ok(SessionCommand::Show) => emit(&mut output, &describe(site)).await?,
                    Ok(SessionCommand::Submit) => match site.submit_reservation().await {
                        Ok(outcome) => {
                            tracing::debug!(?outcome, "Reservation flow finished");
                            emit(&mut output, &describe(site)).await?;
                        }
                        Err(e) => emit(&mut output, &format!("error: {}", e)).await?,
                    },
                    Ok(SessionCommand::Event(event)) => match site.dispatch(event).await {
                        Ok(()) => emit(&mut output, &describe(site)).await?,
                        Err(e) => emit(&mut output, &format!("error: {}", e)).await?,
                    },
                    Err(message) => emit(&mut output, &format!("error: {}", message)).await?,
                }
            }
            Some(tick) = rx.recv() => {
                site.dispatch(tick).await?;
            }
        }
    }

    autoplay.abort();
    tracing::debug!("Interactive session ended");
    Ok(())
}
