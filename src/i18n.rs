//! Interface language and the contact form string table

use crate::state::{FieldName, Subject};
use serde::{Deserialize, Serialize};

/// Supported interface languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ms,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ms,
            Self::Ms => Self::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Ms => "MS",
        }
    }

    /// Map a POSIX locale such as `ms_MY.UTF-8` to a language
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_ascii_lowercase().starts_with("ms") {
            Self::Ms
        } else {
            Self::En
        }
    }

    /// Language of the current environment, from `LC_ALL` then `LANG`
    pub fn detect() -> Self {
        ["LC_ALL", "LANG"]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::from_locale(&value))
            .unwrap_or_default()
    }

    pub fn translations(&self) -> &'static Translations {
        match self {
            Self::En => &EN,
            Self::Ms => &MS,
        }
    }
}

/// User-facing strings of the contact screen
#[derive(Debug)]
pub struct Translations {
    pub contact_title: &'static str,
    pub form_title: &'static str,
    pub form_subtitle: &'static str,
    labels: [&'static str; 6],
    placeholders: [&'static str; 6],
    subjects: [&'static str; 6],
    pub submit: &'static str,
    pub sending: &'static str,
    pub form_success: &'static str,
}

impl Translations {
    pub fn label(&self, field: FieldName) -> &'static str {
        self.labels[field_index(field)]
    }

    pub fn placeholder(&self, field: FieldName) -> &'static str {
        self.placeholders[field_index(field)]
    }

    pub fn subject(&self, subject: Subject) -> &'static str {
        let index = Subject::ALL
            .iter()
            .position(|s| *s == subject)
            .unwrap_or_default();
        self.subjects[index]
    }
}

fn field_index(field: FieldName) -> usize {
    FieldName::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

static EN: Translations = Translations {
    contact_title: "Contact Our GIS Team",
    form_title: "Get In Touch",
    form_subtitle: "Have questions about SIRIUS integration or need technical support? \
                    Our GIS experts are here to help.",
    labels: [
        "Full Name *",
        "Email Address *",
        "Phone Number *",
        "Department",
        "Subject *",
        "Message *",
    ],
    placeholders: [
        "Enter your full name",
        "your.email@petronas.com.my",
        "+60 3-XXXX XXXX",
        "Enter your department",
        "Select inquiry type",
        "Describe your inquiry, technical requirements, or integration needs...",
    ],
    subjects: [
        "General Inquiry",
        "Technical Support",
        "Integration Help",
        "Training Request",
        "Request Demo",
        "Other",
    ],
    submit: "SEND MESSAGE",
    sending: "Sending...",
    form_success: "Thank you! Your message has been sent to our GIS team. \
                   We'll respond within 24 hours.",
};

static MS: Translations = Translations {
    contact_title: "Hubungi Pasukan GIS Kami",
    form_title: "Hubungi Kami",
    form_subtitle: "Ada soalan tentang integrasi SIRIUS atau memerlukan sokongan teknikal? \
                    Pakar GIS kami sedia membantu.",
    labels: [
        "Nama Penuh *",
        "Alamat E-mel *",
        "Nombor Telefon *",
        "Jabatan",
        "Subjek *",
        "Mesej *",
    ],
    placeholders: [
        "Masukkan nama penuh anda",
        "emel.anda@petronas.com.my",
        "+60 3-XXXX XXXX",
        "Masukkan jabatan anda",
        "Pilih jenis pertanyaan",
        "Terangkan pertanyaan, keperluan teknikal, atau keperluan integrasi anda...",
    ],
    subjects: [
        "Pertanyaan Am",
        "Sokongan Teknikal",
        "Bantuan Integrasi",
        "Permintaan Latihan",
        "Minta Demo",
        "Lain-lain",
    ],
    submit: "HANTAR MESEJ",
    sending: "Menghantar...",
    form_success: "Terima kasih! Mesej anda telah dihantar kepada pasukan GIS kami. \
                   Kami akan membalas dalam masa 24 jam.",
};
