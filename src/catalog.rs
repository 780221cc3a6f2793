//! Compiled-in portfolio content and the read-only project catalog.

use crate::error::{PortfolioError, Result};
use crate::models::{
    DemoCredentials, FeaturedProject, GalleryItem, Profile, ProjectImage, SkillGroup, SocialLink,
};
use std::collections::HashSet;
use tracing::debug;

/// Ordered, immutable list of featured projects.
///
/// Built once at start-up and shared behind an `Arc`; there is no way to
/// mutate it after construction.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<FeaturedProject>,
}

impl ProjectCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(projects: Vec<FeaturedProject>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(PortfolioError::DuplicateProjectId(project.id));
            }
        }
        debug!(count = projects.len(), "Project catalog built");
        Ok(Self { projects })
    }

    /// The catalog shipped with the site.
    pub fn default_catalog() -> Result<Self> {
        Self::new(featured_projects())
    }

    pub fn projects(&self) -> &[FeaturedProject] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&FeaturedProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Gallery of project `id`; empty for unknown ids.
    pub fn gallery(&self, id: u32) -> &[GalleryItem] {
        self.get(id).map(|p| p.gallery.as_slice()).unwrap_or(&[])
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn erp_credentials() -> DemoCredentials {
    DemoCredentials {
        email: "test".to_string(),
        password: "test".to_string(),
        note: "Use these credentials to access the Odoo ERP × Navixy GPS Integration demo"
            .to_string(),
    }
}

fn fleet_credentials() -> DemoCredentials {
    DemoCredentials {
        email: "test@test.com".to_string(),
        password: "testpass123".to_string(),
        note: "Use these credentials to access the Fleet Management System demo".to_string(),
    }
}

pub fn featured_projects() -> Vec<FeaturedProject> {
    vec![
        FeaturedProject {
            id: 2,
            title: "Odoo ERP × Navixy GPS Integration".to_string(),
            description: "A customized Odoo 18 ERP Community Edition system that pulls Navixy GPS \
                data from the API, processes zone, fuel, and activity reports, and converts them \
                into daily operational data. It calculates key mining metrics such as cycle haul \
                counts, work stop ratios, fuel usage, and equipment utilization, and stores \
                everything in Odoo/PostgreSQL for reporting."
                .to_string(),
            technologies: strings(&["Python", "Odoo 18", "PostgreSQL", "Navixy API"]),
            github_url: "https://github.com/uranbileguka/odoo18-erp-custom".to_string(),
            live_url: "https://erp.uranbileg.dev/odoo".to_string(),
            image: ProjectImage::parse("/odoo18.jpg"),
            gallery: vec![
                GalleryItem::new(
                    1,
                    "Dump Haul Cycles Count",
                    "Main ERP dashboard with integrated GPS data",
                    Some("/odoo-0.png"),
                ),
                GalleryItem::new(
                    2,
                    "Fleet Management",
                    "Real-time vehicle tracking and monitoring",
                    Some("/odoo-1.png"),
                ),
                GalleryItem::new(
                    3,
                    "Route Analysis",
                    "GPS route visualization and efficiency metrics",
                    Some("/odoo-2.png"),
                ),
                GalleryItem::new(
                    4,
                    "Fuel Consumption Report",
                    "Detailed fuel usage tracking and analysis",
                    Some("/odoo-3.png"),
                ),
                GalleryItem::new(
                    5,
                    "GPS Zone Tracking",
                    "Geofencing and zone-based monitoring",
                    Some("/odoo-4.png"),
                ),
                GalleryItem::new(
                    6,
                    "Motion Hour Report",
                    "Vehicle operation hours and activity tracking",
                    Some("/odoo-5.png"),
                ),
            ],
            show_login_info: true,
            credentials: Some(erp_credentials()),
        },
        FeaturedProject {
            id: 4,
            title: "Full-Stack Fleet Management App (Django + React)".to_string(),
            description: "A full-scale web application with a Django REST API backend and a \
                React.js frontend for fleet management and real-time GPS tracking, with \
                dashboards for vehicle monitoring, fuel consumption analysis, trip history and \
                zone-based reporting."
                .to_string(),
            technologies: strings(&[
                "Django",
                "React.js",
                "REST API",
                "Material-UI",
                "Recharts",
                "Docker",
                "nginx",
            ]),
            github_url: "https://github.com/uranbileguka/se_gps".to_string(),
            live_url: "https://fleet.uranbileg.dev/login".to_string(),
            image: ProjectImage::parse("/fleet-1.jpeg"),
            gallery: vec![
                GalleryItem::new(
                    1,
                    "Fleet login",
                    "Real-time vehicle tracking and status overview",
                    Some("/fleet-1.jpeg"),
                ),
                GalleryItem::new(
                    2,
                    "Zone Report",
                    "Detailed fuel consumption analysis and trends",
                    Some("/fleet-2.png"),
                ),
                GalleryItem::new(
                    3,
                    "Fuel Report",
                    "Geofencing and zone-based activity monitoring",
                    Some("/fleet-3.png"),
                ),
                GalleryItem::new(
                    4,
                    "Fleet record",
                    "Complete trip logs with route visualization",
                    Some("/fleet-4.png"),
                ),
            ],
            show_login_info: true,
            credentials: Some(fleet_credentials()),
        },
        FeaturedProject {
            id: 3,
            title: "Machine learning".to_string(),
            description: "Machine learning experiments on customer segmentation, anomaly \
                detection and classification, with PCA and t-SNE used for visualization."
                .to_string(),
            technologies: strings(&[
                "Python",
                "Pandas",
                "scikit-learn",
                "NumPy",
                "Matplotlib",
                "Seaborn",
            ]),
            github_url: "https://github.com/uranbileguka/machine_learning".to_string(),
            live_url: "https://github.com/uranbileguka/machine_learning/blob/main/README.md"
                .to_string(),
            image: ProjectImage::parse("/ml.jpg"),
            gallery: vec![
                GalleryItem::new(
                    1,
                    "Kannada MNIST - Before Reduction",
                    "Original high-dimensional dataset visualization showing complexity",
                    Some("/ML_bef_digit.png"),
                ),
                GalleryItem::new(
                    2,
                    "Kannada MNIST - After Dimensionality Reduction",
                    "PCA and t-SNE applied for clear cluster visualization",
                    Some("/ML_after_digits.png"),
                ),
                GalleryItem::new(
                    3,
                    "Regression Analysis",
                    "Linear and polynomial regression model comparison",
                    Some("/ML_regression.png"),
                ),
                GalleryItem::new(
                    4,
                    "Wine Quality Clustering",
                    "K-Means clustering analysis on wine dataset",
                    Some("/ML_wine_cluster.png"),
                ),
            ],
            show_login_info: false,
            credentials: None,
        },
        FeaturedProject {
            id: 1,
            title: "Power BI Dashboards".to_string(),
            description: "Interactive Power BI dashboards for a mining/ERP environment covering \
                cost center tracking, payroll summaries, production KPIs and cash flow views."
                .to_string(),
            technologies: strings(&["Power BI", "Power Query", "SQL", "DAX"]),
            github_url: "https://github.com".to_string(),
            live_url: "https://example.com".to_string(),
            image: ProjectImage::parse("🛍️"),
            gallery: vec![
                GalleryItem::new(
                    1,
                    "Dashboard Overview",
                    "Main dashboard with key metrics and KPIs",
                    None,
                ),
                GalleryItem::new(
                    2,
                    "Channel Management",
                    "Manage communication channels and workflows",
                    None,
                ),
                GalleryItem::new(
                    3,
                    "Real-time Chat",
                    "Live chat interface for team collaboration",
                    None,
                ),
                GalleryItem::new(
                    4,
                    "User Settings",
                    "Customize user preferences and permissions",
                    None,
                ),
                GalleryItem::new(
                    5,
                    "Workspace Overview",
                    "Complete workspace management interface",
                    None,
                ),
            ],
            show_login_info: false,
            credentials: None,
        },
    ]
}

pub fn default_profile() -> Profile {
    Profile {
        name: "Uranbileg Enkhjargal".to_string(),
        headline: "Software developer & Data Analyst & ERP Specialist".to_string(),
        tagline: "I turn messy operational and financial data into clear insights, dashboards, \
            and automated systems."
            .to_string(),
        years_experience: 6,
        about: strings(&[
            "I'm a Data Analyst and ERP Specialist with 6 years of experience designing \
             dashboards, automating business processes, and analyzing operational data.",
            "I've implemented full ERP systems, built machine learning models, and automated \
             complex business workflows to drive efficiency and data-driven decision making.",
            "I love turning data into decisions.",
        ]),
        focus_areas: strings(&[
            "Bachelor of Engineering in Software Engineering",
            "Bachelor of Business Administration in Accounting",
            "Data Analysis",
            "ERP Systems",
            "Machine Learning",
            "Business Intelligence",
        ]),
        email: "uenkhjargal@clark.edu".to_string(),
        phone: "+1 (774) 351-8585".to_string(),
        location: "Worcester, USA".to_string(),
        resume_path: "/resume.pdf".to_string(),
        photo_path: "/profile.jpg".to_string(),
        socials: vec![
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/uranbileguka".to_string(),
            },
            SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/uranbileg/".to_string(),
            },
            SocialLink {
                label: "Twitter".to_string(),
                url: "https://twitter.com".to_string(),
            },
        ],
        skills: vec![
            SkillGroup {
                title: "Tools".to_string(),
                glyph: "🛠️".to_string(),
                note: None,
                skills: strings(&[
                    "Power BI",
                    "Excel",
                    "Pivot Tables",
                    "VLOOKUP",
                    "Power Query",
                    "Python",
                    "SQL",
                    "GitHub",
                ]),
            },
            SkillGroup {
                title: "Programming".to_string(),
                glyph: "💻".to_string(),
                note: None,
                skills: strings(&[
                    "Python",
                    "SQL",
                    "Pandas",
                    "NumPy",
                    "Matplotlib",
                    "Scikit-Learn",
                ]),
            },
            SkillGroup {
                title: "Cloud & DevOps".to_string(),
                glyph: "☁️".to_string(),
                note: None,
                skills: strings(&["AWS EC2", "Docker", "Traefik", "PostgreSQL"]),
            },
            SkillGroup {
                title: "ERP".to_string(),
                glyph: "📊".to_string(),
                note: Some("Odoo Modules:".to_string()),
                skills: strings(&["Accounting", "HR", "Payroll", "Inventory", "Manufacturing"]),
            },
        ],
    }
}
