use colored::Colorize;
use flightxml::actions::{list_actions, ActionInfo};
use flightxml::error::{FlightXmlError, Result};
use flightxml::remote::ResultMap;

const NAME_WIDTH: usize = 22;

pub(super) fn render_result(result: &ResultMap, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Help listing: name and description, with the documentation link beneath.
pub(super) fn render_action_help(actions: &[ActionInfo]) -> String {
    let mut output = format!("{}\n", "Available Actions:".bold());
    for action in actions {
        output.push_str(&format!(
            "  {:<width$} {}\n",
            action.name,
            action.description,
            width = NAME_WIDTH
        ));
        output.push_str(&format!(
            "  {:<width$} {}\n",
            "",
            action.doc_url.dimmed(),
            width = NAME_WIDTH
        ));
    }
    output
}

/// Compact listing used when an action is not recognised: one line per action.
pub(super) fn render_action_list(actions: &[ActionInfo]) -> String {
    let mut output = format!("{}\n", "Available Actions:".bold());
    for action in actions {
        output.push_str(&format!(
            "  {:<width$} {}\n",
            action.name,
            action.doc_url,
            width = NAME_WIDTH
        ));
    }
    output
}

/// Print an error to stderr. Unknown actions also get the list of valid ones.
pub fn report_error(err: &FlightXmlError) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let FlightXmlError::UnknownAction(_) = err {
        eprint!("{}", render_action_list(&list_actions()));
    }
}
