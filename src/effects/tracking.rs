use log::info;

pub const CALL_LINK_SELECTOR: &str = "a[href^=\"tel:\"]";
pub const MESSAGING_LINK_SELECTOR: &str = "a[href^=\"https://wa.me\"]";
pub const SERVICE_CARD_SELECTOR: &str = ".service-card";

/// A click worth reporting to analytics. Observing one never changes navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    Call { href: String },
    Messaging { href: String },
    ServiceCard { name: String },
}

impl Interaction {
    /// Classifies a link by its href; `None` for links nobody tracks.
    pub fn from_link(href: &str) -> Option<Self> {
        if href.starts_with("tel:") {
            Some(Interaction::Call { href: href.to_owned() })
        } else if href.starts_with("https://wa.me") {
            Some(Interaction::Messaging { href: href.to_owned() })
        } else {
            None
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Interaction::Call { href } => format!("📞 Call button clicked: {}", href),
            Interaction::Messaging { .. } => "💬 WhatsApp button clicked".to_string(),
            Interaction::ServiceCard { name } => format!("🧹 Service card clicked: {}", name),
        }
    }
}

/// Where tracked interactions go. Swap in an analytics client here.
pub trait InteractionSink {
    fn record(&self, interaction: &Interaction);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl InteractionSink for LogSink {
    fn record(&self, interaction: &Interaction) {
        info!("{}", interaction.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        seen: RefCell<Vec<Interaction>>,
    }

    impl InteractionSink for RecordingSink {
        fn record(&self, interaction: &Interaction) {
            self.seen.borrow_mut().push(interaction.clone());
        }
    }

    #[test]
    fn test_classifies_links() {
        assert_eq!(
            Interaction::from_link("tel:+15551234567"),
            Some(Interaction::Call {
                href: "tel:+15551234567".into()
            })
        );
        assert!(matches!(
            Interaction::from_link("https://wa.me/15551234567"),
            Some(Interaction::Messaging { .. })
        ));
        assert_eq!(Interaction::from_link("#booking"), None);
    }

    #[test]
    fn test_descriptions() {
        let card = Interaction::ServiceCard {
            name: "Deep Cleaning".into(),
        };
        assert_eq!(card.describe(), "🧹 Service card clicked: Deep Cleaning");
        let call = Interaction::Call {
            href: "tel:5551234567".into(),
        };
        assert_eq!(call.describe(), "📞 Call button clicked: tel:5551234567");
    }

    #[test]
    fn test_sink_receives_interactions() {
        let sink = RecordingSink::default();
        sink.record(&Interaction::Messaging {
            href: "https://wa.me/1".into(),
        });
        assert_eq!(sink.seen.borrow().len(), 1);
    }
}
