//! Sample data for the Dashboard section.

use super::{FeatureCard, Health, StepStatus, Tone, Trend};

#[derive(Debug, Clone, Copy)]
pub struct DeploymentStep {
    pub name: &'static str,
    pub status: StepStatus,
    pub progress: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub name: &'static str,
    pub url: &'static str,
    pub health: Health,
    pub uptime: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct QuickMetric {
    pub name: &'static str,
    pub value: &'static str,
    pub trend: Trend,
    pub tone: Tone,
}

pub const TITLE: &str = "DevOps Dashboard";
pub const SUBTITLE: &str = "Monitor and manage your MERN stack deployment pipeline";

pub const DEPLOYMENT_STEPS: &[DeploymentStep] = &[
    DeploymentStep {
        name: "Frontend Build",
        status: StepStatus::Complete,
        progress: 100,
    },
    DeploymentStep {
        name: "Backend Deploy",
        status: StepStatus::Complete,
        progress: 100,
    },
    DeploymentStep {
        name: "Database Setup",
        status: StepStatus::Complete,
        progress: 100,
    },
    DeploymentStep {
        name: "CI/CD Pipeline",
        status: StepStatus::Active,
        progress: 75,
    },
    DeploymentStep {
        name: "Monitoring Setup",
        status: StepStatus::Pending,
        progress: 0,
    },
];

pub const ENVIRONMENTS: &[Environment] = &[
    Environment {
        name: "Production",
        url: "https://myapp.com",
        health: Health::Healthy,
        uptime: "99.9%",
    },
    Environment {
        name: "Staging",
        url: "https://staging.myapp.com",
        health: Health::Healthy,
        uptime: "99.8%",
    },
    Environment {
        name: "Development",
        url: "https://dev.myapp.com",
        health: Health::Warning,
        uptime: "98.5%",
    },
];

pub const METRICS: &[QuickMetric] = &[
    QuickMetric {
        name: "Response Time",
        value: "245ms",
        trend: Trend::Down,
        tone: Tone::Success,
    },
    QuickMetric {
        name: "CPU Usage",
        value: "32%",
        trend: Trend::Stable,
        tone: Tone::Info,
    },
    QuickMetric {
        name: "Memory Usage",
        value: "67%",
        trend: Trend::Up,
        tone: Tone::Warning,
    },
    QuickMetric {
        name: "Error Rate",
        value: "0.2%",
        trend: Trend::Down,
        tone: Tone::Success,
    },
];

pub const QUICK_ACTIONS: &[FeatureCard] = &[
    FeatureCard {
        icon: "◉",
        title: "Monitoring Setup",
        description: "Configure application and infrastructure monitoring",
    },
    FeatureCard {
        icon: "◈",
        title: "Security Config",
        description: "Set up SSL, security headers, and authentication",
    },
    FeatureCard {
        icon: "◍",
        title: "Database Backup",
        description: "Schedule automated backups and recovery plans",
    },
];
