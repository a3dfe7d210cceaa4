//! The generated job-configuration defaults.
//!
//! Typed rendition of the defaults every job definition is merged over:
//! output capture, failure definition, retry policy, the status web
//! listener, and (when a DSN is configured) permanent-failure reporting.
//! Field names serialize to the camelCase keys the job runner expects.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobBase {
    pub defaults: JobDefaults,
    pub web: WebSettings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDefaults {
    pub capture_stdout: bool,
    pub capture_stderr: bool,
    pub kill_timeout: u64,
    pub fails_when: FailsWhen,
    pub on_failure: OnFailure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_permanent_failure: Option<OnPermanentFailure>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailsWhen {
    pub produces_stdout: bool,
    pub produces_stderr: bool,
    pub nonzero_return: bool,
    pub always: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OnFailure {
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    pub maximum_retries: u32,
    pub initial_delay: u64,
    pub maximum_delay: u64,
    pub backoff_multiplier: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OnPermanentFailure {
    pub report: Report,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub sentry: SentryReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentryReport {
    pub dsn: DsnValue,
    pub fingerprint: Vec<String>,
    pub level: String,
    pub environment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DsnValue {
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebSettings {
    pub listen: Vec<String>,
}

/// Alerting settings injected into the defaults when a DSN secret is
/// configured for the environment.
#[derive(Debug, Clone)]
pub struct SentrySettings {
    pub dsn: String,
    pub env_name: String,
}

/// Build the defaults document. Failure means a non-zero exit code only;
/// retries back off from 1s to a 30s cap, doubling, up to 10 attempts.
pub fn job_defaults(runner_name: &str, sentry: Option<&SentrySettings>) -> JobBase {
    let on_permanent_failure = sentry.map(|s| OnPermanentFailure {
        report: Report {
            sentry: SentryReport {
                dsn: DsnValue {
                    value: s.dsn.clone(),
                },
                fingerprint: vec![
                    runner_name.to_string(),
                    "{{ environment.HOSTNAME }}".to_string(),
                    "{{ name }}".to_string(),
                ],
                level: "error".to_string(),
                environment: s.env_name.clone(),
            },
        },
    });

    JobBase {
        defaults: JobDefaults {
            capture_stdout: true,
            capture_stderr: true,
            kill_timeout: 30,
            fails_when: FailsWhen {
                produces_stdout: false,
                produces_stderr: false,
                nonzero_return: true,
                always: false,
            },
            on_failure: OnFailure {
                retry: RetryPolicy {
                    maximum_retries: 10,
                    initial_delay: 1,
                    maximum_delay: 30,
                    backoff_multiplier: 2,
                },
            },
            on_permanent_failure,
        },
        web: WebSettings {
            listen: vec!["http://127.0.0.1:2600".to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_retry_policy() {
        let yaml = serde_yaml::to_string(&job_defaults("yacron", None)).unwrap();
        assert!(yaml.contains("captureStdout: true"));
        assert!(yaml.contains("captureStderr: true"));
        assert!(yaml.contains("killTimeout: 30"));
        assert!(yaml.contains("nonzeroReturn: true"));
        assert!(yaml.contains("maximumRetries: 10"));
        assert!(yaml.contains("initialDelay: 1"));
        assert!(yaml.contains("maximumDelay: 30"));
        assert!(yaml.contains("backoffMultiplier: 2"));
        assert!(yaml.contains("http://127.0.0.1:2600"));
        assert!(!yaml.contains("onPermanentFailure"));
    }

    #[test]
    fn dsn_adds_the_report_block() {
        let sentry = SentrySettings {
            dsn: "https://key@sentry.example.com/42".to_string(),
            env_name: "staging".to_string(),
        };
        let yaml = serde_yaml::to_string(&job_defaults("yacron", Some(&sentry))).unwrap();
        assert!(yaml.contains("onPermanentFailure"));
        assert!(yaml.contains("https://key@sentry.example.com/42"));
        assert!(yaml.contains("level: error"));
        assert!(yaml.contains("environment: staging"));
        assert!(yaml.contains("yacron"));
        assert!(yaml.contains("{{ environment.HOSTNAME }}"));
        assert!(yaml.contains("{{ name }}"));
    }
}
