use maud::{Markup, html};

use crate::SCRIPT_PATH;

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            script src=(SCRIPT_PATH) defer {}
        }
        body {
            h1 { (title) }
            form id="steamids-form" {
                label for="steamids" { "Steam ids (comma separated):" }
                input id="steamids" name="steamids" type="text" placeholder="76561197960287930,76561197960435530";
                button type="submit" { "Compare" }
            }
            div id="error" class="error" {}
            h2 { "Players" }
            ul id="players" {}
            h2 { "Shared games" }
            ul id="shared-games" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_escaped() {
        let page = render_index_template("<b>games</b>").into_string();
        assert!(page.contains("&lt;b&gt;games&lt;/b&gt;"));
        assert!(page.contains(SCRIPT_PATH));
    }
}
