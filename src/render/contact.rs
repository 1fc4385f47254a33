use crate::core::contact::FormStatus;
use crate::core::content::SiteContent;
use maud::{html, Markup};

pub fn render(content: &SiteContent, status: FormStatus) -> Markup {
    let contact = &content.contact;
    let loading = status == FormStatus::Loading;

    html! {
        section.contact {
            h1 { (contact.heading) }
            p { (contact.intro) }
            div.grid {
                aside.card {
                    div {
                        div { "Email" }
                        a href={ "mailto:" (contact.email) } { (contact.email) }
                    }
                    div { div { "Location" } div { (contact.location) } }
                    div { div { "Hours" } div { (contact.hours) } }
                }
                form.card method="post" action="#" {
                    label for="name" { "Name" }
                    input id="name" name="name" type="text" required placeholder="Your name";
                    label for="email" { "Email" }
                    input id="email" name="email" type="email" required placeholder="you@example.com";
                    label for="message" { "Message" }
                    textarea id="message" name="message" required rows="6" placeholder="How can we help?" {}
                    button type="submit" disabled[loading] {
                        @if loading { "Sending..." } @else { "Send message →" }
                    }
                    @match (status, status.message()) {
                        (FormStatus::Success, Some(message)) => {
                            span.status-success role="status" { (message) }
                        }
                        (FormStatus::Error, Some(message)) => {
                            span.status-error role="alert" { (message) }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
