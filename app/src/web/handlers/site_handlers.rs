// app/src/web/handlers/site_handlers.rs

use actix_web::{http::header::ContentType, web, HttpResponse};
use serde_json::json;

use crate::state::AppState;

const INDEX_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Canteen Management System</title>
  <meta name="description" content="A system to manage canteen orders and menus">
</head>
<body>
  <nav>
    <strong>CanteenPro</strong>
    <a href="/login">Login</a>
  </nav>
  <header>
    <h1>Revolutionize Your Campus Dining Experience</h1>
    <p>Pre-order your meals, track what you owe and collect without the queue.</p>
    <a href="/login">Student Portal</a>
  </header>
  <section id="features">
    <h2>Today's Special</h2>
    <ul>
      <li>Veggie Delight: fresh vegetables with signature sauce, Rs. 120.00</li>
      <li>Chicken Supreme: grilled chicken with herbs and spices, Rs. 180.00</li>
    </ul>
  </section>
</body>
</html>
"#;

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Login | Canteen Management System</title>
</head>
<body>
  <h1>Student Login</h1>
  <form id="login">
    <label>Username <input name="username" autocomplete="username"></label>
    <label>Password <input name="password" type="password" autocomplete="current-password"></label>
    <button type="submit">Login</button>
  </form>
  <p id="error" role="alert"></p>
  <script>
    document.getElementById("login").addEventListener("submit", async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const response = await fetch("/api/v1/auth/login", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ username: form.get("username"), password: form.get("password") }),
      });
      if (response.ok) {
        window.location.href = "/api/v1/dashboard";
      } else {
        const body = await response.json().catch(() => ({}));
        document.getElementById("error").textContent = body.error || "Login failed";
      }
    });
  </script>
</body>
</html>
"#;

pub async fn index_handler() -> HttpResponse {
  HttpResponse::Ok().content_type(ContentType::html()).body(INDEX_PAGE)
}

pub async fn login_page_handler() -> HttpResponse {
  HttpResponse::Ok().content_type(ContentType::html()).body(LOGIN_PAGE)
}

pub async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({
      "status": "ok",
      "upstream": app_state.config.api_base_url,
      "visitors": app_state.visitors.len(),
  }))
}
