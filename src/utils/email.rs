use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::instrument;

use nomad_config::EmailConfig;
use nomad_core::AppError;

/// Outgoing mail for account verification and password resets.
///
/// With `SMTP_ENABLED` unset or false, messages are logged and dropped so the
/// API works without a mail server.
pub struct EmailService {
    config: EmailConfig,
    link_expiry: Option<i64>,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            link_expiry: None,
        }
    }

    /// Lifetime of the tokens embedded in links, in seconds. Mails only state
    /// an expiry when this is set.
    pub fn with_link_expiry(mut self, seconds: i64) -> Self {
        self.link_expiry = Some(seconds);
        self
    }

    fn expiry_notice(&self) -> Option<String> {
        self.link_expiry
            .filter(|seconds| *seconds > 0)
            .map(|seconds| format!("This link will expire in {}.", describe_duration(seconds)))
    }

    pub fn verification_link(&self, token: &str) -> String {
        format!("{}/auth/verify/{}", self.config.frontend_url, token)
    }

    pub fn password_reset_link(&self, token: &str) -> String {
        format!("{}/password-reset/{}", self.config.frontend_url, token)
    }

    #[instrument(skip(self, token))]
    pub async fn send_verification_email(
        &self,
        to_email: &str,
        to_name: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let link = self.verification_link(token);
        let notice = self.expiry_notice();

        let text_body = format!(
            "Hi {},\n\n\
             Welcome to Barefoot Nomad! Confirm your email address by opening the link below:\n\
             {}\n\n\
             {}\
             If you didn't create an account, please ignore this email.\n\n\
             Barefoot Nomad Team",
            to_name,
            link,
            text_notice(notice.as_deref())
        );
        let html_body = layout(
            "Verify your email",
            &format!(
                "<p>Hi <strong>{}</strong>,</p>\
                 <p>Welcome to Barefoot Nomad! Confirm your email address to finish setting up your account.</p>\
                 {}\
                 {}\
                 <p>If you didn't create an account, please ignore this email.</p>",
                to_name,
                button(&link, "Verify Email"),
                html_notice(notice.as_deref())
            ),
        );

        self.send_email(to_email, "Verify your email address", &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, token))]
    pub async fn send_password_reset_email(
        &self,
        to_email: &str,
        to_name: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let link = self.password_reset_link(token);
        let notice = self.expiry_notice();

        let text_body = format!(
            "Hi {},\n\n\
             You requested to reset your password. Open the link below to choose a new one:\n\
             {}\n\n\
             {}\
             If you didn't request this, please ignore this email.\n\n\
             Barefoot Nomad Team",
            to_name,
            link,
            text_notice(notice.as_deref())
        );
        let html_body = layout(
            "Password Reset Request",
            &format!(
                "<p>Hi <strong>{}</strong>,</p>\
                 <p>We received a request to reset your password. Click the button below to create a new password:</p>\
                 {}\
                 {}\
                 <p>If you didn't request this password reset, please ignore this email.</p>",
                to_name,
                button(&link, "Reset Password"),
                html_notice(notice.as_deref())
            ),
        );

        self.send_email(to_email, "Password Reset Request", &text_body, &html_body)
            .await
    }

    #[instrument(skip(self))]
    pub async fn send_password_reset_confirmation(
        &self,
        to_email: &str,
        to_name: &str,
    ) -> Result<(), AppError> {
        let text_body = format!(
            "Hi {},\n\n\
             Your password has been successfully reset.\n\n\
             If you didn't make this change, please contact support immediately.\n\n\
             Barefoot Nomad Team",
            to_name
        );
        let html_body = layout(
            "Password Reset Successful",
            &format!(
                "<p>Hi <strong>{}</strong>,</p>\
                 <p>Your password has been successfully reset.</p>\
                 <p>If you didn't make this change, please contact support immediately.</p>",
                to_name
            ),
        );

        self.send_email(to_email, "Password Reset Successful", &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            tracing::info!(to = %to_email, subject, "SMTP disabled, skipping email");
            return Ok(());
        }

        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal_error(format!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal_error(format!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal_error(format!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal_error(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal_error(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}

/// Renders a token lifetime the way it reads in a sentence: "1 hour",
/// "30 minutes", "2 days". Falls back to seconds for odd values.
fn describe_duration(seconds: i64) -> String {
    let (amount, unit) = if seconds % 86_400 == 0 {
        (seconds / 86_400, "day")
    } else if seconds % 3_600 == 0 {
        (seconds / 3_600, "hour")
    } else if seconds % 60 == 0 {
        (seconds / 60, "minute")
    } else {
        (seconds, "second")
    };

    if amount == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", amount, unit)
    }
}

fn text_notice(notice: Option<&str>) -> String {
    notice.map(|n| format!("{}\n\n", n)).unwrap_or_default()
}

fn html_notice(notice: Option<&str>) -> String {
    notice
        .map(|n| format!("<p><strong>{}</strong></p>", n))
        .unwrap_or_default()
}

fn button(link: &str, label: &str) -> String {
    format!(
        r#"<table width="100%" cellpadding="0" cellspacing="0" style="margin: 30px 0;">
    <tr>
        <td align="center">
            <a href="{link}" style="display: inline-block; padding: 14px 40px; background-color: #0E7C66; color: #ffffff; text-decoration: none; border-radius: 6px; font-size: 16px; font-weight: bold;">{label}</a>
        </td>
    </tr>
</table>
<p style="color: #666666; font-size: 14px;">Or copy and paste this link into your browser:</p>
<p style="color: #0E7C66; font-size: 14px; word-break: break-all;">{link}</p>"#
    )
}

fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
                    <tr>
                        <td style="background-color: #0E7C66; padding: 30px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Barefoot Nomad</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px 30px; color: #666666; font-size: 16px; line-height: 1.5;">
                            <h2 style="margin: 0 0 20px 0; color: #333333; font-size: 24px;">{title}</h2>
                            {content}
                        </td>
                    </tr>
                    <tr>
                        <td style="background-color: #f8f9fa; padding: 20px 30px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0; color: #999999; font-size: 12px;">
                                This is an automated email from Barefoot Nomad. Please do not reply.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> EmailService {
        EmailService::new(EmailConfig {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: "noreply@barefootnomad.com".to_string(),
            from_name: "Barefoot Nomad".to_string(),
            frontend_url: "https://nomad.test".to_string(),
        })
    }

    #[test]
    fn test_links_use_frontend_url() {
        let service = service();
        assert_eq!(service.verification_link("abc"), "https://nomad.test/auth/verify/abc");
        assert_eq!(service.password_reset_link("abc"), "https://nomad.test/password-reset/abc");
    }

    #[test]
    fn test_layout_embeds_content() {
        let html = layout("Hello", &button("https://x.test", "Go"));
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains(r#"href="https://x.test""#));
    }

    #[test]
    fn test_expiry_notice_follows_configured_lifetime() {
        assert_eq!(service().expiry_notice(), None);
        assert_eq!(
            service().with_link_expiry(3600).expiry_notice().as_deref(),
            Some("This link will expire in 1 hour.")
        );
        assert_eq!(
            service().with_link_expiry(600).expiry_notice().as_deref(),
            Some("This link will expire in 10 minutes.")
        );
        assert_eq!(service().with_link_expiry(0).expiry_notice(), None);
    }

    #[test]
    fn test_describe_duration() {
        assert_eq!(describe_duration(86_400), "1 day");
        assert_eq!(describe_duration(7_200), "2 hours");
        assert_eq!(describe_duration(90), "90 seconds");
        assert_eq!(describe_duration(60), "1 minute");
    }

    #[test]
    fn test_notices_are_omitted_without_expiry() {
        assert_eq!(text_notice(None), "");
        assert_eq!(html_notice(None), "");
        assert_eq!(
            html_notice(Some("This link will expire in 2 hours.")),
            "<p><strong>This link will expire in 2 hours.</strong></p>"
        );
    }

    #[tokio::test]
    async fn test_disabled_smtp_skips_sending() {
        let result = service()
            .send_password_reset_email("jane@example.com", "Jane", "token")
            .await;
        assert!(result.is_ok());
    }
}
