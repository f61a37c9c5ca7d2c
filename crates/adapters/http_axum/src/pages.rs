//! Server-side rendered landing page.
//!
//! One self-contained HTML page: connection form, instructions, and a
//! small inline script that posts the form as JSON to the `/api`
//! endpoints. The saved hub URL is pre-filled when credentials exist; the
//! saved token is never rendered into the page.

use axum::extract::State;
use axum::response::Html;

use hubscope_app::ports::{CredentialStore, HubClientFactory};

use crate::state::AppState;

/// Escape text for embedding into an HTML attribute value.
fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const STYLE: &str = r"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
       max-width: 700px; margin: 0 auto; padding: 20px; background: #f5f5f5; }
h1 { color: #03a9f4; }
.card { background: white; padding: 20px; border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 20px; }
label { display: block; margin-top: 10px; font-weight: bold; }
input[type=text], input[type=password], select {
    width: 100%; padding: 8px; margin-top: 5px; box-sizing: border-box;
    border: 1px solid #ccc; border-radius: 4px; }
button { background: #03a9f4; color: white; border: none; padding: 10px 20px;
         border-radius: 4px; margin-top: 15px; margin-right: 10px; cursor: pointer; }
button:hover { background: #0288d1; }
#status { margin-top: 15px; white-space: pre-wrap; }
#status.ok { color: #4caf50; }
#status.err { color: #f44336; }
pre { background: #fafafa; border: 1px solid #e0e0e0; padding: 10px;
      border-radius: 4px; overflow-x: auto; }
";

const SCRIPT: &str = r#"
function payload() {
    return {
        url: document.getElementById('url').value,
        token: document.getElementById('token').value,
        save_config: document.getElementById('save').checked,
    };
}
function show(text, ok) {
    const status = document.getElementById('status');
    status.textContent = text;
    status.className = ok ? 'ok' : 'err';
}
async function call(path, body) {
    const response = await fetch(path, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body),
    });
    return response;
}
async function testConnection() {
    const reply = await (await call('/api/test-connection', payload())).json();
    show(reply.success ? reply.message : reply.error, reply.success);
}
async function generateReport() {
    show('Generating report...', true);
    const reply = await (await call('/api/generate-report', payload())).json();
    if (reply.success) {
        const stats = reply.report.statistics;
        show('Report generated: ' + stats.total_entities + ' entities in '
            + stats.total_domains + ' domains', true);
        document.getElementById('preview').textContent =
            JSON.stringify(reply.report, null, 2);
    } else {
        show(reply.error, false);
    }
}
async function downloadReport() {
    const body = payload();
    body.format = document.getElementById('format').value;
    const response = await call('/api/download-report', body);
    const type = response.headers.get('Content-Type') || '';
    if (type.startsWith('application/json') && !response.headers.get('Content-Disposition')) {
        const reply = await response.json();
        show(reply.error, false);
        return;
    }
    const blob = await response.blob();
    const link = document.createElement('a');
    link.href = URL.createObjectURL(blob);
    const disposition = response.headers.get('Content-Disposition') || '';
    const match = disposition.match(/filename="(.+)"/);
    link.download = match ? match[1] : 'hub_report';
    link.click();
    URL.revokeObjectURL(link.href);
    show('Download started', true);
}
"#;

fn render_page(saved_url: &str, has_saved: bool) -> String {
    let token_hint = if has_saved {
        "A token is saved on the server. Enter it again to run a report."
    } else {
        "Create a long-lived access token in your hub's profile page."
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Hub Overview</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n<body>\n\
         <h1>Hub Overview</h1>\n\
         <div class=\"card\">\n\
         <p>Connect to your hub and export a full report of its components,\n\
         entities, services, and events.</p>\n\
         <form onsubmit=\"return false\">\n\
         <label for=\"url\">Hub URL</label>\n\
         <input type=\"text\" id=\"url\" placeholder=\"http://homeassistant.local:8123\" value=\"{url}\">\n\
         <label for=\"token\">Access token</label>\n\
         <input type=\"password\" id=\"token\" placeholder=\"Long-lived access token\">\n\
         <p>{token_hint}</p>\n\
         <label><input type=\"checkbox\" id=\"save\"> Save connection on the server</label>\n\
         <label for=\"format\">Download format</label>\n\
         <select id=\"format\">\n\
         <option value=\"json\">JSON</option>\n\
         <option value=\"txt\">Text</option>\n\
         <option value=\"html\">HTML</option>\n\
         <option value=\"claude\">Assistant markdown</option>\n\
         </select>\n\
         <button onclick=\"testConnection()\">Test connection</button>\n\
         <button onclick=\"generateReport()\">Generate report</button>\n\
         <button onclick=\"downloadReport()\">Download</button>\n\
         <div id=\"status\"></div>\n\
         </form>\n\
         </div>\n\
         <div class=\"card\">\n\
         <pre id=\"preview\"></pre>\n\
         </div>\n\
         <script>{SCRIPT}</script>\n\
         </body>\n</html>\n",
        url = escape_attr(saved_url),
    )
}

/// `GET /` — connection form, pre-filled with the saved hub URL if any.
pub async fn index<F, S>(State(state): State<AppState<F, S>>) -> Html<String>
where
    F: HubClientFactory + 'static,
    S: CredentialStore + 'static,
{
    let saved = match state.store.load().await {
        Ok(saved) => saved,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load saved credentials");
            None
        }
    };
    let saved_url = saved.as_ref().map_or("", |credentials| credentials.url.as_str());
    Html(render_page(saved_url, saved.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_escape_attribute_breakers() {
        assert_eq!(
            escape_attr(r#"http://x/"><script>"#),
            "http://x/&quot;&gt;&lt;script&gt;"
        );
    }

    #[test]
    fn should_prefill_saved_url_without_any_token() {
        let page = render_page("http://hub.local:8123", true);
        assert!(page.contains("value=\"http://hub.local:8123\""));
        assert!(page.contains("A token is saved on the server"));
        assert!(page.contains("type=\"password\""));
    }

    #[test]
    fn should_render_empty_form_when_nothing_is_saved() {
        let page = render_page("", false);
        assert!(page.contains("value=\"\""));
        assert!(page.contains("Create a long-lived access token"));
    }
}
