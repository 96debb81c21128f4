//! Service detail page catalog.

use serde::Serialize;

/// Static content of one service detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServicePage {
    /// Path segment under `/services/`.
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Icon identifier understood by the stylesheet.
    pub icon: &'static str,
    /// Bullet list rendered by the content block.
    pub services: &'static [&'static str],
}

impl ServicePage {
    pub fn path(&self) -> String {
        format!("/services/{}", self.slug)
    }
}

pub const CLOUD_HOSTING: ServicePage = ServicePage {
    slug: "cloud-hosting",
    title: "Cloud Hosting",
    subtitle: "Scalable, secure infrastructure that grows with your business",
    icon: "cloud",
    services: &[
        "Cloud Migration & Deployment",
        "Managed Cloud Servers",
        "Load Balancing & Auto-Scaling",
        "Backup & Disaster Recovery",
        "Cloud Security & Compliance",
        "Performance Monitoring",
        "Multi-Cloud Architecture",
        "24/7 Infrastructure Support",
    ],
};

pub const CRM_DEVELOPMENT: ServicePage = ServicePage {
    slug: "crm-development",
    title: "CRM Development",
    subtitle: "Customer relationship platforms built around your sales process",
    icon: "users",
    services: &[
        "Custom CRM Design",
        "Sales Pipeline Automation",
        "Customer Data Integration",
        "Marketing Automation",
        "Reporting & Analytics Dashboards",
        "CRM Migration & Support",
    ],
};

pub const AI_SOLUTIONS: ServicePage = ServicePage {
    slug: "ai-solutions",
    title: "AI Solutions",
    subtitle: "Practical machine intelligence for everyday business problems",
    icon: "brain",
    services: &[
        "Machine Learning Models",
        "Natural Language Processing",
        "Computer Vision",
        "Predictive Analytics",
        "AI Chatbots & Virtual Assistants",
        "Recommendation Engines",
        "AI Strategy Consulting",
    ],
};

pub const ERP_SOLUTIONS: ServicePage = ServicePage {
    slug: "erp-solutions",
    title: "ERP Solutions",
    subtitle: "One system of record for finance, operations and people",
    icon: "database",
    services: &[
        "ERP Implementation",
        "Inventory & Supply Chain Management",
        "Finance & Accounting Modules",
        "HR & Payroll Integration",
        "Custom ERP Modules",
        "ERP Upgrades & Support",
    ],
};

pub const MOBILE_APP_DEVELOPMENT: ServicePage = ServicePage {
    slug: "mobile-app-development",
    title: "Mobile App Development",
    subtitle: "Native and cross-platform apps your customers will keep using",
    icon: "smartphone",
    services: &[
        "iOS App Development",
        "Android App Development",
        "Cross-Platform Apps",
        "Mobile UI/UX Design",
        "App Store Deployment",
        "Maintenance & Updates",
    ],
};

pub const WEB_DEVELOPMENT: ServicePage = ServicePage {
    slug: "web-development",
    title: "Web Development",
    subtitle: "Fast, accessible websites and web applications",
    icon: "code",
    services: &[
        "Custom Web Applications",
        "E-commerce Development",
        "Content Management Systems",
        "Progressive Web Apps",
        "API Development & Integration",
        "Website Maintenance",
        "Performance Optimization",
    ],
};

pub const UI_UX_DESIGN: ServicePage = ServicePage {
    slug: "ui-ux-design",
    title: "UI/UX Design",
    subtitle: "Interfaces shaped by research and tested with real users",
    icon: "palette",
    services: &[
        "User Research",
        "Wireframing & Prototyping",
        "Visual Interface Design",
        "Usability Testing",
        "Design Systems",
        "Accessibility Audits",
    ],
};

pub const DEVOPS: ServicePage = ServicePage {
    slug: "devops",
    title: "DevOps",
    subtitle: "Ship more often with fewer surprises",
    icon: "git-branch",
    services: &[
        "CI/CD Pipeline Setup",
        "Infrastructure as Code",
        "Containerization & Orchestration",
        "Monitoring & Logging",
        "Release Automation",
        "Cloud Cost Optimization",
        "DevSecOps Practices",
    ],
};

/// Every service page, in navigation order.
pub const SERVICE_PAGES: &[ServicePage] = &[
    CLOUD_HOSTING,
    CRM_DEVELOPMENT,
    AI_SOLUTIONS,
    ERP_SOLUTIONS,
    MOBILE_APP_DEVELOPMENT,
    WEB_DEVELOPMENT,
    UI_UX_DESIGN,
    DEVOPS,
];

/// Look up a page by its slug.
pub fn find_service(slug: &str) -> Option<&'static ServicePage> {
    SERVICE_PAGES.iter().find(|page| page.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cloud_hosting_services() {
        let page = find_service("cloud-hosting").unwrap();
        assert_eq!(page.services.len(), 8);
        assert!(page.services.contains(&"Load Balancing & Auto-Scaling"));
    }

    #[test]
    fn test_slugs_unique_and_routable() {
        let slugs: HashSet<_> = SERVICE_PAGES.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), SERVICE_PAGES.len());
        for page in SERVICE_PAGES {
            assert!(!page.services.is_empty(), "{} has no services", page.slug);
            assert!(page
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert!(find_service("software-solutions").is_none());
        assert!(find_service("Cloud-Hosting").is_none());
    }
}
