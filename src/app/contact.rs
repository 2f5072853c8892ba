use std::time::Duration;

use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::contact::{ContactError, ContactField, ContactMessage, SendNotice, NOTICE_DURATION_MS};

#[server(input = Json)]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ServerFnError> {
    use std::sync::Arc;

    use crate::mailer::{deliver, DeliveryError, EmailJsProvider};

    let Some(provider) = use_context::<Arc<EmailJsProvider>>() else {
        tracing::warn!("contact message dropped, no mail provider configured");
        return Err(ServerFnError::new("the contact form is not available right now"));
    };
    deliver(provider.as_ref(), message)
        .await
        .map_err(|e| match e {
            DeliveryError::Invalid(_) => ServerFnError::new(e.to_string()),
            DeliveryError::Mail(_) => ServerFnError::new("the mail service is unavailable"),
        })
}

fn failure_reason(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(reason) => reason,
        other => other.to_string(),
    }
}

#[component]
fn Field(
    label: &'static str,
    id: &'static str,
    field: Option<ContactField>,
    errors: RwSignal<Vec<ContactError>>,
    children: Children,
) -> impl IntoView {
    let error = move || {
        field.and_then(|f| {
            errors
                .get()
                .into_iter()
                .find(|e| e.field() == f)
                .map(|e| e.to_string())
        })
    };
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            {children()}
            {move || error().map(|e| view! { <p class="mt-1 text-sm text-red-600">{e}</p> })}
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<ContactError>::new());
    let notice = RwSignal::new(None::<(u64, SendNotice)>);

    let send = ServerAction::<SendContactMessage>::new();
    let pending = send.pending();

    Effect::new(move |_| {
        let Some(result) = send.value().get() else {
            return;
        };
        let shown = match result {
            Ok(()) => {
                for field in [name, email, company, message] {
                    field.set(String::new());
                }
                SendNotice::Sent
            }
            Err(e) => {
                let reason = failure_reason(e);
                log::warn!("contact form send failed: {reason}");
                SendNotice::Failed(reason)
            }
        };
        let id = notice
            .with_untracked(|n| n.as_ref().map(|(id, _)| id + 1))
            .unwrap_or_default();
        notice.set(Some((id, shown)));
        set_timeout(
            move || {
                // a newer notice owns the slot now
                if notice.with_untracked(|n| matches!(n, Some((current, _)) if *current == id)) {
                    notice.set(None);
                }
            },
            Duration::from_millis(NOTICE_DURATION_MS),
        );
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let company = company.get_untracked();
        let validated = ContactMessage::validate(
            &name.get_untracked(),
            &email.get_untracked(),
            Some(company.as_str()),
            &message.get_untracked(),
        );
        match validated {
            Ok(msg) => {
                errors.set(Vec::new());
                send.dispatch(SendContactMessage { message: msg });
            }
            Err(found) => errors.set(found),
        }
    };

    let input_class = "w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500";

    view! {
        <form class="space-y-4 relative" on:submit=on_submit novalidate=true>
            <Field label="Name" id="name" field=Some(ContactField::Name) errors=errors>
                <input
                    type="text"
                    id="name"
                    class=input_class
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </Field>
            <Field label="Email" id="email" field=Some(ContactField::Email) errors=errors>
                <input
                    type="email"
                    id="email"
                    class=input_class
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </Field>
            <Field label="Company (optional)" id="company" field=None errors=errors>
                <input
                    type="text"
                    id="company"
                    class=input_class
                    prop:value=company
                    on:input=move |ev| company.set(event_target_value(&ev))
                />
            </Field>
            <Field label="Message" id="message" field=Some(ContactField::Message) errors=errors>
                <textarea
                    id="message"
                    rows=4
                    class=input_class
                    prop:value=message
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </Field>
            <button
                type="submit"
                class="px-6 py-3 bg-gradient-to-r from-emerald-600 to-emerald-700 text-white font-medium rounded-md hover:from-emerald-700 hover:to-emerald-800 transition-colors duration-300 shadow-md disabled:opacity-60"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Sending..." } else { "Send Message" }}
            </button>
            {move || {
                notice
                    .get()
                    .map(|(_, n)| {
                        let failed = n.is_error();
                        view! {
                            <div
                                role="status"
                                class="fixed bottom-6 right-6 z-50 px-4 py-3 rounded-md shadow-lg text-white fade-up"
                                class:bg-emerald-700=!failed
                                class:bg-red-600=failed
                            >
                                {n.text()}
                            </div>
                        }
                    })
            }}
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_request_carries_whole_message() {
        let body = serde_json::to_value(SendContactMessage { message: message() }).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "message": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "company": null,
                    "message": "Hello",
                }
            })
        );
    }

    #[tokio::test]
    async fn test_send_without_provider_fails() {
        let err = send_contact_message(message()).await.unwrap_err();
        assert_eq!(
            failure_reason(err),
            "the contact form is not available right now"
        );
    }
}
