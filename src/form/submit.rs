use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use log::{error, info};
use thiserror::Error;
use web_sys::RequestMode;

use super::validation::{DemoRequest, FormError, FormFields, SubmitButton};

#[derive(Debug, Error, Clone, PartialEq)]
#[error("request failed: {0}")]
pub struct SubmitError(pub String);

/// Where validated demo requests go.
#[cfg_attr(test, mockall::automock)]
pub trait RequestGateway {
    fn send(&self, request: &DemoRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Posts to the spreadsheet script. The request is `no-cors`, so the response
/// is opaque and any completed request counts as delivered.
pub struct SheetsGateway {
    endpoint: String,
}

impl SheetsGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl RequestGateway for SheetsGateway {
    fn send(&self, request: &DemoRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        let request = request.clone();
        Box::pin(async move {
            Request::post(&endpoint)
                .mode(RequestMode::NoCors)
                .header("Content-Type", "application/json")
                .json(&request)
                .map_err(|e| SubmitError(e.to_string()))?
                .send()
                .await
                .map(|_| ())
                .map_err(|e| SubmitError(e.to_string()))
        })
    }
}

/// Validates `fields` and, if they pass, posts them through `gateway`.
///
/// `render` receives every button state change: the busy state before the
/// request and the restored state after it. Validation failures return before
/// `render` or the gateway are touched.
pub async fn submit_form<G, F>(
    gateway: &G,
    fields: &FormFields,
    button: &SubmitButton,
    render: F,
) -> Result<DemoRequest, FormError>
where
    G: RequestGateway + ?Sized,
    F: Fn(SubmitButton),
{
    let request = fields.validate()?;

    render(button.sending());
    let result = gateway.send(&request).await;
    render(button.restored());

    match result {
        Ok(()) => {
            info!("Form submitted successfully: {:?}", request);
            Ok(request)
        }
        Err(e) => {
            error!("Error submitting form: {}", e);
            Err(FormError::Transport(e.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn fields(email: &str) -> FormFields {
        FormFields {
            name: "Ada".into(),
            email: email.into(),
            organization: "Acme".into(),
            ..FormFields::default()
        }
    }

    #[test]
    fn malformed_email_never_reaches_the_network() {
        let mut gateway = MockRequestGateway::new();
        gateway.expect_send().times(0);

        let button = SubmitButton::new("Request Demo");
        let renders = RefCell::new(Vec::new());
        let result = block_on(submit_form(&gateway, &fields("not-an-email"), &button, |b| {
            renders.borrow_mut().push(b)
        }));

        assert_eq!(result, Err(FormError::InvalidEmail));
        assert!(renders.borrow().is_empty());
        assert!(button.is_idle());
        assert_eq!(button.label, "Request Demo");
    }

    #[test]
    fn successful_submission_flips_and_restores_the_button() {
        let mut gateway = MockRequestGateway::new();
        gateway
            .expect_send()
            .withf(|request| request.email == "ada@example.org" && request.organization == "Acme")
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let button = SubmitButton::new("Request Demo");
        let renders = RefCell::new(Vec::new());
        let result = block_on(submit_form(&gateway, &fields("ada@example.org"), &button, |b| {
            renders.borrow_mut().push(b)
        }));

        assert!(result.is_ok());
        let renders = renders.into_inner();
        assert_eq!(renders.len(), 2);
        assert_eq!(renders[0].label, "Sending...");
        assert!(renders[0].disabled);
        assert_eq!(renders[1], button);
    }

    #[test]
    fn transport_failure_restores_the_button_and_reports() {
        let mut gateway = MockRequestGateway::new();
        gateway
            .expect_send()
            .times(1)
            .returning(|_| Box::pin(async { Err(SubmitError("offline".into())) }));

        let button = SubmitButton::new("Send");
        let last = RefCell::new(None);
        let result = block_on(submit_form(&gateway, &fields("ada@example.org"), &button, |b| {
            *last.borrow_mut() = Some(b)
        }));

        assert_eq!(result, Err(FormError::Transport("offline".into())));
        assert_eq!(last.into_inner(), Some(button));
    }
}
