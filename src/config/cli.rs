use crate::domain::model::{FormSubmission, QuickButton};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "velobrava-contact")]
#[command(about = "Build and check WhatsApp contact links for Velobrava tours")]
pub struct CliConfig {
    /// Path to a TOML site configuration (tours, guides, cooldown)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Turn a contact form into a WhatsApp link for the tour's guide
    Form(FormArgs),
    /// Link for a quick-contact button on a tour card
    Quick(QuickArgs),
    /// Check that a URL is a safe WhatsApp link
    Validate { url: String },
    /// Percent-encode a message the way WhatsApp links need it
    Encode { message: String },
}

#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub tour: String,

    #[arg(long, default_value = "")]
    pub level: String,

    /// Preferred date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub comments: Option<String>,

    /// Send to this number instead of the tour's guide
    #[arg(long)]
    pub to: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl FormArgs {
    pub fn submission(&self) -> FormSubmission {
        let optional = [
            ("phone", self.phone.clone()),
            ("date", self.date.clone()),
            ("comments", self.comments.clone()),
        ];

        FormSubmission::from_pairs(
            [
                ("name", self.name.clone()),
                ("email", self.email.clone()),
                ("tour", self.tour.clone()),
                ("level", self.level.clone()),
            ]
            .into_iter()
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v))),
            ),
        )
    }
}

#[derive(Debug, Clone, Args)]
pub struct QuickArgs {
    #[arg(long)]
    pub tour: String,

    /// consulta-rapida, consulta-general, or anything else for a generic inquiry
    #[arg(long = "message-type", default_value = "consulta-rapida")]
    pub message_type: String,
}

impl QuickArgs {
    pub fn button(&self) -> QuickButton {
        QuickButton::new(self.tour.clone(), self.message_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_command() {
        let config = CliConfig::parse_from([
            "velobrava-contact",
            "form",
            "--name",
            "Juan Perez",
            "--email",
            "juan@email.com",
            "--tour",
            "costa-brava",
            "--date",
            "2024-04-15",
            "--yes",
        ]);

        match config.command {
            Command::Form(args) => {
                assert!(args.yes);
                let form = args.submission();
                assert_eq!(form.name, "Juan Perez");
                assert_eq!(form.date.as_deref(), Some("2024-04-15"));
                assert_eq!(form.phone, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = CliConfig::parse_from([
            "velobrava-contact",
            "validate",
            "https://wa.me/34663575346",
            "--verbose",
        ]);
        assert!(config.verbose);
        assert!(config.config.is_none());
    }
}
