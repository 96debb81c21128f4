//! Privacy policy document.

use serde::Serialize;

/// Document metadata emitted into `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// A heading and its paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicySection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const PRIVACY_PATH: &str = "/privacy-policy";

pub const PRIVACY_METADATA: PageMetadata = PageMetadata {
    title: "Privacy Policy",
    description: "How we collect, use and protect the personal information you share with us.",
    keywords: &[
        "privacy policy",
        "data protection",
        "personal information",
        "cookies",
        "GDPR",
    ],
};

pub const PRIVACY_SECTIONS: &[PolicySection] = &[
    PolicySection {
        heading: "Information We Collect",
        paragraphs: &[
            "We collect the details you provide when you contact us, such as your name, email address, phone number and company.",
            "Our servers record standard request logs including IP address, browser type and the pages you visit.",
        ],
    },
    PolicySection {
        heading: "How We Use Information",
        paragraphs: &[
            "Contact details are used only to respond to enquiries and to deliver the services you request.",
            "Request logs are used to keep the site secure and to understand which pages are useful.",
        ],
    },
    PolicySection {
        heading: "Cookies",
        paragraphs: &[
            "This site does not set tracking cookies. Strictly necessary cookies may be set by our hosting provider.",
        ],
    },
    PolicySection {
        heading: "Data Retention",
        paragraphs: &[
            "Enquiries are kept for as long as needed to serve you and are deleted on request.",
            "Request logs are rotated and deleted after 90 days.",
        ],
    },
    PolicySection {
        heading: "Your Rights",
        paragraphs: &[
            "You may ask us to access, correct or delete the personal information we hold about you at any time.",
        ],
    },
    PolicySection {
        heading: "Contact",
        paragraphs: &[
            "Questions about this policy can be sent to privacy@northwind-it.example.",
        ],
    },
];
