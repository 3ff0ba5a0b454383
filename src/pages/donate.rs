//! Donation page.
//!
//! Simulated flow only: pick or type an amount, pick a payment
//! method, and submit. Processing is a two-second delay followed by
//! an unconditional thank-you screen. No payment rails are attached.

use std::time::Duration;

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Icon;

const PRESET_AMOUNTS: [&str; 3] = ["10", "50", "100"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DonationPhase {
    Form,
    Processing,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentMethod {
    Card,
    Bank,
}

#[component]
pub fn DonatePage() -> Element {
    let mut amount = use_signal(String::new);
    let mut method = use_signal(|| PaymentMethod::Card);
    let mut phase = use_signal(|| DonationPhase::Form);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if amount().is_empty() || phase() != DonationPhase::Form {
            return;
        }
        tracing::info!(amount = %amount(), method = ?method(), "donation submitted");
        phase.set(DonationPhase::Processing);
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            phase.set(DonationPhase::Success);
        });
    };

    if phase() == DonationPhase::Success {
        let donated = amount();
        return rsx! {
            div { class: "donate-success-screen",
                div { class: "donate-success-card",
                    div { class: "donate-success-icon", Icon { name: "Check", size: 48 } }
                    h1 { class: "donate-success-title", "JazakAllah Khair!" }
                    p { class: "donate-success-text",
                        "Thank you for your generous donation of "
                        span { class: "donate-success-amount", "${donated}" }
                        ". May Allah reward you abundantly and bless your wealth."
                    }
                    Link { class: "gold-button wide", to: Route::HomePage {}, "Back to Home" }
                }
            }
        };
    }

    let processing = phase() == DonationPhase::Processing;
    let shown_amount = if amount().is_empty() { "0".to_string() } else { amount() };

    rsx! {
        div { class: "donate-page",
            div { class: "donate-inner",
                Link { class: "back-link", to: Route::HomePage {},
                    Icon { name: "ArrowLeft", size: 20 }
                    "Back to Home"
                }

                div { class: "donate-grid",
                    div { class: "donate-pitch",
                        h1 { class: "donate-title", "Support Mosjid Al Fahad" }
                        p { class: "donate-lead",
                            "Your donations are the lifeblood of our mosque. They help us maintain our facilities, provide educational programs, and support those in need within our community."
                        }

                        div { class: "donate-points",
                            div { class: "donate-point",
                                div { class: "donate-point-icon", Icon { name: "ShieldCheck", size: 24 } }
                                div {
                                    h3 { class: "donate-point-title", "Secure Payment" }
                                    p { class: "donate-point-text", "Your transaction is encrypted and secure." }
                                }
                            }
                            div { class: "donate-point",
                                div { class: "donate-point-icon", Icon { name: "Gift", size: 24 } }
                                div {
                                    h3 { class: "donate-point-title", "Sadaqah Jariyah" }
                                    p { class: "donate-point-text", "Invest in your hereafter with a recurring donation." }
                                }
                            }
                        }
                    }

                    form { class: "donate-card", onsubmit: submit,
                        div {
                            label { class: "donate-label", "Select Amount" }
                            div { class: "amount-presets",
                                for preset in PRESET_AMOUNTS {
                                    button {
                                        class: if amount() == preset { "amount-preset active" } else { "amount-preset" },
                                        r#type: "button",
                                        onclick: move |_| amount.set(preset.to_string()),
                                        "${preset}"
                                    }
                                }
                            }
                            div { class: "amount-input-wrap",
                                span { class: "amount-input-icon", Icon { name: "DollarSign", size: 20 } }
                                input {
                                    class: "amount-input",
                                    r#type: "number",
                                    placeholder: "Other Amount",
                                    value: "{amount()}",
                                    oninput: move |evt| amount.set(evt.value()),
                                }
                            }
                        }

                        div {
                            label { class: "donate-label", "Payment Method" }
                            div { class: "method-toggle",
                                button {
                                    class: if method() == PaymentMethod::Card { "method-option active" } else { "method-option" },
                                    r#type: "button",
                                    onclick: move |_| method.set(PaymentMethod::Card),
                                    Icon { name: "CreditCard", size: 20 }
                                    "Card"
                                }
                                button {
                                    class: if method() == PaymentMethod::Bank { "method-option active" } else { "method-option" },
                                    r#type: "button",
                                    onclick: move |_| method.set(PaymentMethod::Bank),
                                    Icon { name: "Banknote", size: 20 }
                                    "Bank"
                                }
                            }
                        }

                        button {
                            class: "gold-button wide tall",
                            r#type: "submit",
                            disabled: amount().is_empty() || processing,
                            if processing {
                                span { class: "button-spinner" }
                            } else {
                                Icon { name: "Heart", size: 22 }
                                "Donate ${shown_amount} Now"
                            }
                        }

                        p { class: "donate-footnote", "Securely processed by Mosjid Al Fahad" }
                    }
                }
            }
        }
    }
}
