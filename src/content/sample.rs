//! WolfStack sample content.

use super::types::*;

pub const DEFAULT_ASSET_BASE: &str = "/images";

/// The WolfStack portfolio content, with images under `/images`.
pub fn sample() -> PageContent {
    sample_with_asset_base(DEFAULT_ASSET_BASE)
}

/// The WolfStack portfolio content with background images under `asset_base`.
pub fn sample_with_asset_base(asset_base: &str) -> PageContent {
    let base = asset_base.trim_end_matches('/');
    let background = |name: &str, opacity: f32| Background {
        path: format!("{}/{}.png", base, name),
        opacity,
    };

    PageContent {
        title: "WolfStack | Senior iOS Developer".to_string(),
        brand: Brand {
            name: "WolfStack".to_string(),
            tagline: "Senior iOS Developer".to_string(),
        },
        nav: vec![
            nav("About", "about"),
            nav("Expertise", "expertise"),
            nav("Process", "process"),
            nav("Contact", "contact"),
        ],
        hero: Hero {
            eyebrow: "Senior iOS Developer".to_string(),
            heading_lines: vec![
                "Silent execution.".to_string(),
                "Strong architecture.".to_string(),
            ],
            subheading: "I build iOS applications with clean architecture, performance optimization, and long-term maintainability. 5+ years crafting production apps that scale.".to_string(),
            primary_cta: cta("View My Process", "#process"),
            secondary_cta: cta("Get in Touch", "#contact"),
            background: background("hero-bg", 0.3),
        },
        about: About {
            heading: "About WolfStack".to_string(),
            paragraphs: vec![
                Paragraph::plain("I'm a Senior iOS Developer with a focus on building production-grade applications that prioritize clean architecture, performance, and maintainability. My approach is calm, methodical, and grounded in engineering principles rather than trends."),
                Paragraph::plain("Over 5+ years, I've architected and shipped iOS applications serving millions of users. I specialize in translating complex business requirements into elegant, scalable solutions using Swift and modern iOS frameworks."),
                Paragraph {
                    inlines: vec![
                        Inline::Text("My philosophy: ".to_string()),
                        Inline::Accent("strong architecture beats quick fixes".to_string()),
                        Inline::Text(". I believe in writing code that lasts, systems that scale, and solutions that don't require constant refactoring.".to_string()),
                    ],
                },
                Paragraph::plain("When I'm not building apps, I'm studying architecture patterns, performance optimization techniques, and the intersection of design and engineering. I'm driven by the craft of building software that feels intentional."),
            ],
            stats: vec![
                stat("5+", "Years Experience"),
                stat("20+", "Apps Shipped"),
                stat("10M+", "Users Reached"),
            ],
        },
        expertise: Expertise {
            heading: "iOS Technical Stack".to_string(),
            background: background("expertise-bg", 0.15),
            groups: vec![
                group(
                    "Languages & Frameworks",
                    &[
                        ("Swift & SwiftUI", "Modern declarative UI development with SwiftUI, async/await patterns, and reactive programming."),
                        ("UIKit", "Deep expertise in UIViewController lifecycle, custom layouts, and performance optimization."),
                        ("Combine Framework", "Reactive streams, publishers, subscribers, and complex data flow management."),
                    ],
                ),
                group(
                    "Architecture & Patterns",
                    &[
                        ("MVVM & Clean Architecture", "Separation of concerns, testable code, and maintainable project structure."),
                        ("Dependency Injection", "Loose coupling, testability, and flexible component composition."),
                        ("State Management", "Redux patterns, MVVM+C, and predictable state flows."),
                    ],
                ),
                group(
                    "Networking & Data",
                    &[
                        ("REST APIs & GraphQL", "URLSession, Alamofire, and efficient API client architecture."),
                        ("Firebase & Realtime", "Cloud Firestore, Realtime Database, and push notifications."),
                        ("Local Persistence", "Core Data, Realm, and UserDefaults optimization."),
                    ],
                ),
                group(
                    "Security & Performance",
                    &[
                        ("Security", "Keychain integration, biometric authentication, and secure data handling."),
                        ("Performance", "Memory profiling, battery optimization, and smooth 60fps animations."),
                        ("Testing", "Unit testing, integration testing, and UI testing with XCTest."),
                    ],
                ),
            ],
        },
        process: Process {
            heading: "How I Build iOS Apps".to_string(),
            intro: "A professional, step-by-step approach to building production-grade iOS applications.".to_string(),
            background: background("process-bg", 0.15),
            steps: steps(&[
                ("Understanding Product & Business Requirements", "Deep dive into business goals, user needs, and technical constraints. I align with stakeholders on success metrics and scope before writing a single line of code."),
                ("UX/UI Collaboration & Apple HIG", "Work with designers to translate mockups into iOS-native experiences. Adherence to Apple Human Interface Guidelines ensures consistency and user familiarity."),
                ("Architecture Selection", "Choose the right architecture pattern (MVVM, Clean Architecture, or VIPER) based on project complexity. Establish clear boundaries between presentation, business logic, and data layers."),
                ("Networking & Data Layer", "Build robust API clients with error handling, retry logic, and offline support. Implement efficient local persistence strategies for optimal performance."),
                ("State Management & Business Logic", "Implement predictable state management using Combine or Redux patterns. Ensure business logic is testable and decoupled from UI."),
                ("Testing & Quality Assurance", "Write comprehensive unit tests, integration tests, and UI tests. Aim for high code coverage and catch regressions early."),
                ("Performance Optimization", "Profile memory usage, optimize battery consumption, and ensure smooth 60fps animations. Measure and iterate based on real device performance."),
                ("App Store Delivery & Maintenance", "Prepare for App Store submission, manage versioning, and establish processes for ongoing maintenance and feature updates."),
            ]),
        },
        philosophy: Philosophy {
            heading: "Work Philosophy".to_string(),
            principles: vec![
                principle("Calm Execution", "No panic-driven decisions. I approach challenges methodically, breaking complex problems into manageable pieces. Quality over speed. Sustainable over heroic."),
                principle("Strong Architecture", "Architecture is the foundation. Invest time upfront to build systems that scale. Good architecture makes future changes easy and reduces technical debt."),
                principle("Clean Code Over Hype", "I focus on fundamentals: readability, testability, and maintainability. Trends come and go. Clean code is timeless. I choose proven patterns over bleeding-edge frameworks."),
                principle("Reliability & Ownership", "I own my work. Every line of code, every decision, every trade-off. I measure success by how well the app performs in production, not by how quickly I shipped it."),
            ],
        },
        contact: Contact {
            heading: "Let's Work Together".to_string(),
            intro: "I'm available for senior iOS development roles, consulting projects, and technical leadership opportunities. Let's discuss how I can help build something great.".to_string(),
            methods: vec![
                contact(ContactKind::Email, "mail", "Email", "hello@wolfstack.dev", "mailto:hello@wolfstack.dev"),
                contact(ContactKind::ExternalLink, "github", "GitHub", "github.com/wolfstack", "https://github.com/wolfstack"),
                contact(ContactKind::ExternalLink, "linkedin", "LinkedIn", "linkedin.com/in/wolfstack", "https://linkedin.com/in/wolfstack"),
            ],
            primary_cta: cta("Send me an email", "mailto:hello@wolfstack.dev"),
        },
        footer: Footer {
            attribution: "WolfStack — Senior iOS Developer".to_string(),
            motto: "Designed for clarity. Built for scale.".to_string(),
            copyright: "© 2024 WolfStack. All rights reserved.".to_string(),
        },
    }
}

fn nav(label: &str, anchor_id: &str) -> NavLink {
    NavLink {
        label: label.to_string(),
        anchor_id: anchor_id.to_string(),
    }
}

fn cta(label: &str, href: &str) -> CallToAction {
    CallToAction {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn stat(value: &str, label: &str) -> StatItem {
    StatItem {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn group(heading: &str, entries: &[(&str, &str)]) -> SkillGroup {
    SkillGroup {
        heading: heading.to_string(),
        entries: entries
            .iter()
            .map(|(name, description)| SkillEntry {
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

fn steps(items: &[(&str, &str)]) -> Vec<ProcessStep> {
    items
        .iter()
        .enumerate()
        .map(|(i, (title, description))| ProcessStep {
            ordinal: ProcessStep::ordinal_for(i),
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn principle(title: &str, body: &str) -> Principle {
    Principle {
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn contact(kind: ContactKind, icon: &str, label: &str, display_value: &str, target: &str) -> ContactMethod {
    ContactMethod {
        kind,
        label: label.to_string(),
        display_value: display_value.to_string(),
        target: target.to_string(),
        icon: Some(icon.to_string()),
    }
}
