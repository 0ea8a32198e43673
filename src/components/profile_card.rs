use dioxus::prelude::*;

use crate::utils::ProfileContent;

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardProps {
    #[props(default)]
    pub content: ProfileContent,
}

/// Avatar, heading and a short list of sentences
#[component]
pub fn ProfileCard(props: ProfileCardProps) -> Element {
    let content = props.content;

    rsx! {
        main {
            span {
                class: "relative flex shrink-0 h-20 w-20 rounded-full overflow-hidden mx-auto",
                img {
                    class: "aspect-square h-full w-full object-cover",
                    alt: content.avatar_alt,
                    src: content.avatar_url,
                }
            }
            h3 {
                class: "text-xl font-bold mt-4 text-slate-800",
                "{content.heading}"
            }
            div {
                class: "sentence-list text-sm text-slate-600",
                for (index, line) in content.lines.iter().enumerate() {
                    p { key: "{index}", "{line}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: ProfileContent) -> String {
        let mut dom = VirtualDom::new_with_props(ProfileCard, ProfileCardProps { content });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_custom_content() {
        let content = ProfileContent {
            avatar_url: "https://example.com/a.png",
            avatar_alt: "Avatar",
            heading: "Greetings",
            lines: &["first", "second"],
        };

        let html = render(content);

        assert!(html.contains("src=\"https://example.com/a.png\""));
        assert!(html.contains("alt=\"Avatar\""));
        assert!(html.contains(">Greetings</h3>"));
        assert_eq!(html.matches("<p").count(), 2);
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_line_list() {
        let content = ProfileContent {
            lines: &[],
            ..ProfileContent::default()
        };

        let html = render(content);

        assert_eq!(html.matches("<p").count(), 0);
        assert!(html.contains("sentence-list"));
    }
}
