//! Sample data for the CI/CD section.

use super::{RunStatus, Setting};

#[derive(Debug, Clone, Copy)]
pub struct Workflow {
    pub name: &'static str,
    pub file: &'static str,
    pub status: RunStatus,
    pub last_run: &'static str,
    pub duration: &'static str,
    pub branch: &'static str,
}

/// Variables configured for one deployment environment.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentConfig {
    pub name: &'static str,
    pub settings: &'static [Setting],
}

pub const TITLE: &str = "CI/CD Pipeline";
pub const SUBTITLE: &str = "Continuous Integration and Deployment workflows";

pub const WORKFLOWS: &[Workflow] = &[
    Workflow {
        name: "Frontend Deploy",
        file: ".github/workflows/frontend.yml",
        status: RunStatus::Success,
        last_run: "2 minutes ago",
        duration: "3m 24s",
        branch: "main",
    },
    Workflow {
        name: "Backend Tests",
        file: ".github/workflows/backend-test.yml",
        status: RunStatus::Running,
        last_run: "Running now",
        duration: "1m 45s",
        branch: "develop",
    },
    Workflow {
        name: "Database Migration",
        file: ".github/workflows/db-migrate.yml",
        status: RunStatus::Failed,
        last_run: "1 hour ago",
        duration: "45s",
        branch: "main",
    },
];

pub const FRONTEND_WORKFLOW: &str = r#"name: Frontend Deployment

on:
  push:
    branches: [ main ]
    paths: [ 'frontend/**' ]
  pull_request:
    branches: [ main ]

jobs:
  build-and-deploy:
    runs-on: ubuntu-latest

    steps:
    - uses: actions/checkout@v3

    - name: Setup Node.js
      uses: actions/setup-node@v3
      with:
        node-version: '18'
        cache: 'npm'

    - name: Install dependencies
      run: npm ci

    - name: Run tests
      run: npm test

    - name: Build application
      run: npm run build
      env:
        VITE_API_URL: ${{ secrets.VITE_API_URL }}

    - name: Deploy to Vercel
      uses: vercel/action@v1
      with:
        vercel-token: ${{ secrets.VERCEL_TOKEN }}
        vercel-org-id: ${{ secrets.ORG_ID }}
        vercel-project-id: ${{ secrets.PROJECT_ID }}"#;

pub const BACKEND_WORKFLOW: &str = r#"name: Backend Deployment

on:
  push:
    branches: [ main ]
    paths: [ 'backend/**' ]

jobs:
  test-and-deploy:
    runs-on: ubuntu-latest

    services:
      mongodb:
        image: mongo:latest
        ports:
          - 27017:27017

    steps:
    - uses: actions/checkout@v3

    - name: Setup Node.js
      uses: actions/setup-node@v3
      with:
        node-version: '18'

    - name: Install dependencies
      run: npm ci
      working-directory: ./backend

    - name: Run tests
      run: npm test
      working-directory: ./backend
      env:
        MONGODB_URI: mongodb://localhost:27017/test

    - name: Deploy to Render
      run: |
        curl -X POST \
          -H "Authorization: Bearer ${{ secrets.RENDER_API_KEY }}" \
          -H "Content-Type: application/json" \
          https://api.render.com/v1/services/${{ secrets.SERVICE_ID }}/deploys"#;

pub const ENVIRONMENT_CONFIGS: &[EnvironmentConfig] = &[
    EnvironmentConfig {
        name: "Development",
        settings: &[
            Setting {
                key: "NODE_ENV",
                value: "development",
            },
            Setting {
                key: "API_URL",
                value: "http://localhost:5000",
            },
            Setting {
                key: "DB_URI",
                value: "mongodb://localhost:27017",
            },
        ],
    },
    EnvironmentConfig {
        name: "Staging",
        settings: &[
            Setting {
                key: "NODE_ENV",
                value: "staging",
            },
            Setting {
                key: "API_URL",
                value: "https://api-staging.app.com",
            },
            Setting {
                key: "DB_URI",
                value: "mongodb+srv://staging...",
            },
        ],
    },
    EnvironmentConfig {
        name: "Production",
        settings: &[
            Setting {
                key: "NODE_ENV",
                value: "production",
            },
            Setting {
                key: "API_URL",
                value: "https://api.myapp.com",
            },
            Setting {
                key: "DB_URI",
                value: "mongodb+srv://prod...",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_files_live_under_github_workflows() {
        assert!(
            WORKFLOWS
                .iter()
                .all(|w| w.file.starts_with(".github/workflows/"))
        );
    }

    #[test]
    fn templates_keep_github_expressions_verbatim() {
        assert!(FRONTEND_WORKFLOW.contains("${{ secrets.VERCEL_TOKEN }}"));
        assert!(BACKEND_WORKFLOW.contains("${{ secrets.RENDER_API_KEY }}"));
    }

    #[test]
    fn backend_template_keeps_line_continuations() {
        assert!(BACKEND_WORKFLOW.contains("curl -X POST \\\n"));
    }

    #[test]
    fn every_environment_defines_the_same_keys() {
        for env in ENVIRONMENT_CONFIGS {
            let keys: Vec<_> = env.settings.iter().map(|s| s.key).collect();
            assert_eq!(keys, ["NODE_ENV", "API_URL", "DB_URI"], "{}", env.name);
        }
    }
}
