//! Static page content
//!
//! Copy and structure for the "Dragons & Dates" event page. All of it is
//! opaque data to the core: the form controller and reveal orchestrator
//! never parse any of these strings.

use playbill_core::TicketType;

/// Hero section copy
#[derive(Clone, Copy, Debug)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub epigraph: &'static str,
}

/// One playbill fact (date, time, location, capacity)
#[derive(Clone, Copy, Debug)]
pub struct EventFact {
    pub label: &'static str,
    pub value: &'static str,
}

/// One act of the five-act programme
#[derive(Clone, Copy, Debug)]
pub struct ActEntry {
    pub numeral: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One admission option
#[derive(Clone, Copy, Debug)]
pub struct PricingOption {
    pub ticket: TicketType,
    pub price_usd: u32,
    pub note: Option<&'static str>,
}

/// One FAQ entry
#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn hero() -> Hero {
    Hero {
        title: "Dragons & Dates",
        tagline: "A Valentine's Day Theatrical Workshop | Fortress Sydney",
        epigraph: "\"For never was a story of more woe... than this of Juliet and her Romeo.\"",
    }
}

pub fn event_facts() -> [EventFact; 4] {
    [
        EventFact { label: "Date", value: "February 14th, 2026" },
        EventFact { label: "Time", value: "6:30 PM - 9:00 PM" },
        EventFact { label: "Location", value: "Fortress Sydney" },
        EventFact { label: "Capacity", value: "15 Couples (30 Seats)" },
    ]
}

pub fn five_acts() -> [ActEntry; 5] {
    [
        ActEntry {
            numeral: "I",
            title: "\"Do you bite your thumb at us, sir?\"",
            description: "Master the art of the brush-learn proper grip and pressure without biting your thumb!",
        },
        ActEntry {
            numeral: "II",
            title: "\"Two households, both alike in dignity\"",
            description: "Choose your side: House of Fire (Red) or House of Ice (White). Base coating and color theory.",
        },
        ActEntry {
            numeral: "III",
            title: "\"Parting is such sweet sorrow\"",
            description: "Learn the secrets of blending and elemental transitions on your dragon's scales.",
        },
        ActEntry {
            numeral: "IV",
            title: "\"O, she doth teach the torches to burn bright!\"",
            description: "Add the highlights that make your dragon truly legendary-eyes, scales, and hoard gold.",
        },
        ActEntry {
            numeral: "V",
            title: "\"For never was a story of more woe...\"",
            description: "Seal your work with varnish and present your pair to the court. Rewrite the ending!",
        },
    ]
}

pub fn pricing() -> [PricingOption; 2] {
    [
        PricingOption {
            ticket: TicketType::Individual,
            price_usd: TicketType::Individual.price_usd(),
            note: None,
        },
        PricingOption {
            ticket: TicketType::CouplesBundle,
            price_usd: TicketType::CouplesBundle.price_usd(),
            note: Some("Save $5!"),
        },
    ]
}

pub fn faq_entries() -> [FaqEntry; 5] {
    [
        FaqEntry {
            question: "Do I need painting experience?",
            answer: "Not at all! Our Five-Act structure is designed for all skill levels. Whether you're a master painter or have never held a brush, you'll create something beautiful.",
        },
        FaqEntry {
            question: "What's included in the ticket?",
            answer: "Everything you need: a high-quality resin dragon miniature from the 'Clash of Primevals' collection, all paints and brushes, and a themed display box to take your creation home.",
        },
        FaqEntry {
            question: "Can I bring my own miniature?",
            answer: "This workshop is specifically designed around our Fire & Ice dragon pair. The curriculum and paint sets are tailored to these models.",
        },
        FaqEntry {
            question: "What if I'm coming alone?",
            answer: "Solo adventurers are welcome! You'll be paired with other individuals to share the experience. Everyone leaves with their own dragon.",
        },
        FaqEntry {
            question: "Is food and drink available?",
            answer: "Fortress Sydney offers a full tavern menu. We recommend arriving early to grab a drink before the show begins!",
        },
    ]
}

pub fn footer_lines() -> [&'static str; 2] {
    [
        "DRAGONS & DATES \u{2022} VALENTINE'S DAY 2026",
        "Presented by Team ARC at Fortress Sydney",
    ]
}
