//! Sample data for the Monitoring section.

use super::{AlertKind, FeatureCard, ResourceStatus, Trend};

#[derive(Debug, Clone, Copy)]
pub struct SystemMetric {
    pub name: &'static str,
    pub value: u16,
    pub max: u16,
    pub status: ResourceStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct AppMetric {
    pub name: &'static str,
    pub current: &'static str,
    pub change: f64,
    pub trend: Trend,
}

impl AppMetric {
    /// Change since the last hour, e.g. `+23% from last hour`.
    pub fn change_label(&self) -> String {
        let sign = if self.change > 0.0 { "+" } else { "" };
        format!("{}{}% from last hour", sign, self.change)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: &'static str,
    pub time: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceUptime {
    pub service: &'static str,
    pub uptime: &'static str,
    pub status: &'static str,
}

pub const TITLE: &str = "System Monitoring";
pub const SUBTITLE: &str = "Real-time application and infrastructure monitoring";

pub const SYSTEM_METRICS: &[SystemMetric] = &[
    SystemMetric {
        name: "CPU Usage",
        value: 32,
        max: 100,
        status: ResourceStatus::Good,
    },
    SystemMetric {
        name: "Memory",
        value: 67,
        max: 100,
        status: ResourceStatus::Warning,
    },
    SystemMetric {
        name: "Disk Space",
        value: 45,
        max: 100,
        status: ResourceStatus::Good,
    },
    SystemMetric {
        name: "Network I/O",
        value: 23,
        max: 100,
        status: ResourceStatus::Good,
    },
];

pub const APP_METRICS: &[AppMetric] = &[
    AppMetric {
        name: "Response Time",
        current: "245ms",
        change: -12.0,
        trend: Trend::Down,
    },
    AppMetric {
        name: "Requests/min",
        current: "1,234",
        change: 23.0,
        trend: Trend::Up,
    },
    AppMetric {
        name: "Error Rate",
        current: "0.2%",
        change: -0.1,
        trend: Trend::Down,
    },
    AppMetric {
        name: "Active Users",
        current: "156",
        change: 45.0,
        trend: Trend::Up,
    },
];

pub const ALERTS: &[Alert] = &[
    Alert {
        id: 1,
        kind: AlertKind::Warning,
        message: "High memory usage detected on production server",
        time: "2 minutes ago",
        service: "Backend API",
    },
    Alert {
        id: 2,
        kind: AlertKind::Info,
        message: "Deployment completed successfully",
        time: "15 minutes ago",
        service: "Frontend",
    },
    Alert {
        id: 3,
        kind: AlertKind::Error,
        message: "Database connection timeout in staging",
        time: "1 hour ago",
        service: "Database",
    },
];

pub const UPTIME: &[ServiceUptime] = &[
    ServiceUptime {
        service: "Frontend",
        uptime: "99.9%",
        status: "operational",
    },
    ServiceUptime {
        service: "Backend API",
        uptime: "99.8%",
        status: "operational",
    },
    ServiceUptime {
        service: "Database",
        uptime: "99.9%",
        status: "operational",
    },
    ServiceUptime {
        service: "CDN",
        uptime: "100%",
        status: "operational",
    },
];

pub const TOOLS: &[FeatureCard] = &[
    FeatureCard {
        icon: "ϟ",
        title: "Error Tracking",
        description: "Set up Sentry for real-time error monitoring and crash reporting",
    },
    FeatureCard {
        icon: "▲",
        title: "Performance",
        description: "Monitor application performance with detailed analytics",
    },
    FeatureCard {
        icon: "◔",
        title: "Alerts & Notifications",
        description: "Configure custom alerts for critical system events",
    },
];
