//! Static pages served by the gateway.

use maud::{html, PreEscaped, DOCTYPE};

use crate::redirect::policy::SafeUrl;

const PAGE_STYLE: &str = r#"
      body {
        margin: 0;
      }
      #main {
        font-family: helvetica;
        text-align: center;
        position: absolute;
        bottom: 1em;
        width: 100%;
        /* Hidden until the script below reveals it, so a fast redirect
         * does not flash the notice. */
        visibility: hidden;
      }
"#;

const NOSCRIPT_STYLE: &str = "#main { visibility: visible; }";

// Reveal the notice in case a download dialog stalls the redirect.
const REVEAL_SCRIPT: &str = r#"
      setTimeout(function() {
        var el = document.getElementById('main');
        el.style.visibility = 'visible';
      }, 2000);
"#;

const CONTACT_URL: &str = "https://addons.mozilla.org/developers/docs/policies/contact";

/// Render the meta-refresh page for `url`.
///
/// `SafeUrl` renders without further escaping, so the destination is
/// escaped exactly once.
pub fn render_redirect(url: &SafeUrl) -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content={ "0;url=" (url) };
                title { "Redirecting to " (url) }
                style { (PreEscaped(PAGE_STYLE)) }
                noscript {
                    style { (PreEscaped(NOSCRIPT_STYLE)) }
                }
            }
            body {
                div #main {
                    h1 {
                        "Redirecting to "
                        a href=(url) { (url) }
                    }
                    strong {
                        "Please use caution when installing third-party add-ons. If you are \
                         immediately prompted to install an add-on, please "
                        a href=(CONTACT_URL) { "let us know" }
                    }
                }
                script { (PreEscaped(REVEAL_SCRIPT)) }
            }
        }
    }
    .into_string()
}

pub fn home_page() -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "outgoing urls" }
            }
            body {
                h1 { "outgoing urls." }
            }
        }
    }
    .into_string()
}
