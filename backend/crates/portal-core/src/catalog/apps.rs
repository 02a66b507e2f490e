use crate::{AppCategory, AppLink, AppStatus};

/// Every app shown on the portal, in display order
pub const APPS: &[AppLink] = &[
    // Optimization & analytics
    AppLink {
        id: "more-optimal",
        name: "More Optimal Platform",
        description: "Pick Optimizer and Trailer Type Calculator for warehouse optimization",
        url: "https://scex.moreoptimal.com/app/index",
        category: AppCategory::Optimization,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "powerbi",
        name: "PowerBI Dashboards",
        description: "Published dashboards for business intelligence and analytics",
        url: "https://app.powerbi.com/groups/cfa5821e-7fcb-41dc-9705-2276a3bb6583/list?experience=power-bi",
        category: AppCategory::Analytics,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "forecaster",
        name: "Forecasting Tool",
        description: "Advanced forecasting for LinkedIn and other platforms (Demo Mode available)",
        url: "https://sso-forecaster.vercel.app/",
        category: AppCategory::Analytics,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: true,
        progress: None,
    },
    AppLink {
        id: "tco-calculator",
        name: "TCO Calculator",
        description: "Total Cost of Ownership calculator (in progress but functional)",
        url: "https://sso-tco-calculator.vercel.app/calculator",
        category: AppCategory::Analytics,
        status: AppStatus::InProgress,
        is_external: true,
        is_custom_build: true,
        progress: None,
    },
    AppLink {
        id: "scenario-simulator",
        name: "Scenario Simulator",
        description: "Business scenario modeling and simulation tool (Early Development)",
        url: "https://sc-sim.vercel.app/admin/dashboard",
        category: AppCategory::Analytics,
        status: AppStatus::InProgress,
        is_external: true,
        is_custom_build: true,
        progress: Some(15),
    },
    AppLink {
        id: "impact-matrix",
        name: "Impact Matrix",
        description: "Organizational impact assessment and analysis",
        url: "https://impactmatrix.vercel.app/organizations",
        category: AppCategory::Analytics,
        status: AppStatus::Beta,
        is_external: true,
        is_custom_build: true,
        progress: Some(70),
    },
    // HubSpot
    AppLink {
        id: "hubspot",
        name: "HubSpot",
        description: "CRM and marketing automation platform",
        url: "https://app-eu1.hubspot.com/user-guide/146233913?via=home",
        category: AppCategory::Collaboration,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "company-scraper",
        name: "HubSpot Company Research",
        description: "Company scraper and HubSpot automation integration",
        url: "https://hubspot-company-research.vercel.app/",
        category: AppCategory::Automation,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: true,
        progress: None,
    },
    // Simplicate
    AppLink {
        id: "simplicate",
        name: "Simplicate",
        description: "Project management and business operations dashboard",
        url: "https://scex.simplicate.nl/dashboard/overview",
        category: AppCategory::Collaboration,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "simplicate-automations",
        name: "Simplicate Automations",
        description: "Custom dashboards and workflow automations",
        url: "https://simplicate-automations.vercel.app/admin/dashboard",
        category: AppCategory::Automation,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: true,
        progress: None,
    },
    // Company resources
    AppLink {
        id: "scex-website",
        name: "SCEX Website",
        description: "Official SCEX company website and information portal",
        url: "https://www.scex.nl",
        category: AppCategory::Collaboration,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "linkedin-business",
        name: "LinkedIn Business Page",
        description: "SCEX LinkedIn company page admin dashboard",
        url: "https://www.linkedin.com/company/18216856/admin/dashboard/",
        category: AppCategory::Collaboration,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "scex-connect",
        name: "SCEX Connect",
        description: "Backend portal and system connections",
        url: "https://scex.nl/connect",
        category: AppCategory::Tools,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "sharepoint",
        name: "SharePoint",
        description: "SCEX Software Optimization collaboration hub",
        url: "https://scexonline.sharepoint.com/sites/SCEXSoftwareOptimization/SitePages/CollabHome.aspx",
        category: AppCategory::Collaboration,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "vision-planner",
        name: "Vision Planner",
        description: "Financial planning and analytics dashboard",
        url: "https://cloud.visionplanner.nl/presentation",
        category: AppCategory::Analytics,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: false,
        progress: None,
    },
    AppLink {
        id: "raci-matrix",
        name: "RACI Matrix",
        description: "Responsibility assignment matrix for project clarity",
        url: "https://raci-matrix.vercel.app/dashboard",
        category: AppCategory::Tools,
        status: AppStatus::InProgress,
        is_external: true,
        is_custom_build: true,
        progress: Some(30),
    },
    AppLink {
        id: "powerpoint-addin",
        name: "PowerPoint Add-in",
        description: "Placeholder management tool for presentations",
        url: "https://powerpoint-placeholder-addin.vercel.app/",
        category: AppCategory::Tools,
        status: AppStatus::Production,
        is_external: true,
        is_custom_build: true,
        progress: None,
    },
];

pub fn find_app(id: &str) -> Option<&'static AppLink> {
    APPS.iter().find(|app| app.id == id)
}
