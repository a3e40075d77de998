/// Rich-text formatting is delegated to an external collaborator by
/// command name plus optional value, mirroring a host editable-region
/// command interface. None of it is core logic; the mock's collaborator
/// just logs the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    UnorderedList,
    OrderedList,
    FontName(String),
    FontSize(String),
}

impl FormatCommand {
    pub fn name(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::UnorderedList => "insertUnorderedList",
            FormatCommand::OrderedList => "insertOrderedList",
            FormatCommand::FontName(_) => "fontName",
            FormatCommand::FontSize(_) => "fontSize",
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            FormatCommand::FontName(v) | FormatCommand::FontSize(v) => Some(v),
            _ => None,
        }
    }
}

/// Font families offered by the compose toolbar dropdown.
pub const FONT_CHOICES: &[&str] = &["Sans Serif", "Serif", "Monospace"];

/// Font size labels and the host-interface values they map to.
pub const FONT_SIZE_LABELS: &[&str] = &["Small", "Normal", "Large", "Huge"];
pub const FONT_SIZE_VALUES: &[&str] = &["1", "3", "5", "7"];

/// Invoke the host formatting command against the focused editable
/// region. No return value is consumed.
pub fn apply(command: &FormatCommand) {
    match command.value() {
        Some(value) => log::info!("format command {} ({value})", command.name()),
        None => log::info!("format command {}", command.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_match_the_host_interface() {
        assert_eq!(FormatCommand::Bold.name(), "bold");
        assert_eq!(FormatCommand::UnorderedList.name(), "insertUnorderedList");
        assert_eq!(FormatCommand::OrderedList.name(), "insertOrderedList");
        assert_eq!(
            FormatCommand::FontName("Serif".into()).name(),
            "fontName"
        );
    }

    #[test]
    fn only_font_commands_carry_a_value() {
        assert_eq!(FormatCommand::Italic.value(), None);
        assert_eq!(
            FormatCommand::FontSize("5".into()).value().unwrap(),
            "5"
        );
    }
}
