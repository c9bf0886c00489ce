//! HTML pages for Latchkey.
//!
//! Two pure functions, one per page. They take plain strings and return
//! complete documents; nothing here touches sessions or HTTP.
//!
//! Anything user-controlled is escaped with `html-escape` before it is
//! spliced into markup.

/// Renders the protected home page for a logged-in user.
pub fn render_home(username: &str) -> String {
    let name = html_escape::encode_text(username);

    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>Home</title>
<style>{style}</style>
</head><body>
<div class="card">
  <h1>Welcome, {name}!</h1>
  <p>You are logged in.</p>
  <a class="btn" href="/logout">Log out</a>
</div>
</body></html>"#,
        style = base_style(),
    )
}

/// Renders the login form. It posts `username` and `password` to `/login`.
pub fn render_login() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>Log in</title>
<style>{style}</style>
</head><body>
<div class="card">
  <h1>Log in</h1>
  <form method="POST" action="/login">
    <div class="form-group">
      <label for="username">Username</label>
      <input id="username" type="text" name="username" required autocomplete="username">
    </div>
    <div class="form-group">
      <label for="password">Password</label>
      <input id="password" type="password" name="password" required autocomplete="current-password">
    </div>
    <button type="submit" class="btn">Log in</button>
  </form>
</div>
</body></html>"#,
        style = base_style(),
    )
}

fn base_style() -> &'static str {
    r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        background: #f5f5f5; color: #333;
        display: flex; justify-content: center; align-items: center;
        min-height: 100vh; padding: 20px;
    }
    .card {
        background: #fff; border-radius: 16px; padding: 32px;
        max-width: 400px; width: 100%; box-shadow: 0 4px 24px rgba(0,0,0,0.08);
    }
    h1 { font-size: 24px; margin-bottom: 16px; }
    p { margin-bottom: 16px; color: #666; }
    .form-group { margin-bottom: 16px; }
    .form-group label { display: block; font-size: 14px; margin-bottom: 6px; }
    .form-group input {
        width: 100%; padding: 12px 14px; border: 1.5px solid #ddd;
        border-radius: 10px; font-size: 16px;
    }
    .btn {
        display: block; width: 100%; padding: 14px; border: none; border-radius: 10px;
        background: #4a6cf7; color: #fff; font-size: 16px; text-align: center;
        text-decoration: none; cursor: pointer;
    }
    "#
}
