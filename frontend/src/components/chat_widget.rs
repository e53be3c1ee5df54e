use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::animations::{Preset, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Support,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub from: Sender,
    pub text: String,
}

/// Local conversation shown in the widget. Nothing is sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                from: Sender::Support,
                text: "Hi! 👋 How can we help you today?".to_string(),
            }],
        }
    }
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the user's message unless it is blank.
    pub fn send(&mut self, input: &str) -> bool {
        let text = input.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            from: Sender::User,
            text: text.to_string(),
        });
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let log = use_state(ChatLog::default);
    let input = use_state(String::new);
    let end_ref = use_node_ref();

    {
        let end_ref = end_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(end) = end_ref.cast::<web_sys::Element>() {
                    end.scroll_into_view();
                }
                || ()
            },
            ((*log).messages().len(), props.is_open),
        );
    }

    if !props.is_open {
        return html! {};
    }

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let onsubmit = {
        let log = log.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*log).clone();
            if next.send(&input) {
                log.set(next);
                input.set(String::new());
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="chat-widget" style={Transition::new(Preset::FadeInUp).duration(250).style()}>
            <style>{r#"
                .chat-widget {
                    position: fixed;
                    bottom: 6rem;
                    left: 1.5rem;
                    z-index: 50;
                    width: 20rem;
                    max-width: 95vw;
                    height: 24rem;
                    background: white;
                    border-radius: 16px;
                    border: 1px solid #99f6e4;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    display: flex;
                    flex-direction: column;
                }
                .chat-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1rem;
                    background: linear-gradient(90deg, #009999, #14B8A6);
                    border-radius: 16px 16px 0 0;
                    color: white;
                }
                .chat-header img {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: white;
                    padding: 0.25rem;
                }
                .chat-header .chat-title { font-weight: 600; }
                .chat-header .chat-status { font-size: 0.75rem; color: #ccfbf1; }
                .chat-header button {
                    margin-left: auto;
                    background: transparent;
                    border: none;
                    color: white;
                    cursor: pointer;
                }
                .chat-messages {
                    flex: 1;
                    overflow-y: auto;
                    padding: 0.5rem 0.75rem;
                    background: rgba(240, 253, 250, 0.4);
                }
                .chat-row { display: flex; margin-bottom: 0.5rem; }
                .chat-row.user { justify-content: flex-end; }
                .chat-bubble {
                    max-width: 70%;
                    padding: 0.5rem 0.75rem;
                    border-radius: 12px;
                    font-size: 0.875rem;
                    background: white;
                    border: 1px solid #ccfbf1;
                    color: #1f2937;
                }
                .chat-row.user .chat-bubble {
                    background: linear-gradient(135deg, #14B8A6, #009999);
                    border: none;
                    color: black;
                }
                .chat-input {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    border-top: 1px solid #e5e7eb;
                }
                .chat-input input {
                    flex: 1;
                    padding: 0.5rem 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid #99f6e4;
                    font-size: 0.875rem;
                }
                .chat-input button {
                    background: transparent;
                    border: none;
                    color: #0d9488;
                    cursor: pointer;
                }
            "#}</style>
            <div class="chat-header">
                <img src="/assets/logo.svg" alt="HealthSeva logo" />
                <div>
                    <div class="chat-title">{"HealthSeva Support"}</div>
                    <div class="chat-status">{"Typically replies within a few minutes"}</div>
                </div>
                <button aria-label="Close chat" onclick={on_close}>{"✕"}</button>
            </div>
            <div class="chat-messages">
                { for log.messages().iter().map(|message| {
                    let row = match message.from {
                        Sender::User => "chat-row user",
                        Sender::Support => "chat-row",
                    };
                    html! {
                        <div class={row}>
                            <div class="chat-bubble">{&message.text}</div>
                        </div>
                    }
                }) }
                <div ref={end_ref}></div>
            </div>
            <form class="chat-input" {onsubmit}>
                <input
                    type="text"
                    placeholder="Type your message..."
                    value={(*input).clone()}
                    {oninput}
                />
                <button type="submit" aria-label="Send">{"➤"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let log = ChatLog::default();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].from, Sender::Support);
    }

    #[test]
    fn test_send_trims_and_appends() {
        let mut log = ChatLog::default();
        assert!(log.send("  Do you visit Kankarbagh?  "));
        let last = log.messages().last().unwrap();
        assert_eq!(last.from, Sender::User);
        assert_eq!(last.text, "Do you visit Kankarbagh?");
    }

    #[test]
    fn test_blank_messages_are_dropped() {
        let mut log = ChatLog::default();
        assert!(!log.send(""));
        assert!(!log.send("   \n"));
        assert_eq!(log.messages().len(), 1);
    }
}
