use crate::pages::partials::breadcrumb;
use actix_web::HttpResponse;

pub async fn home_controller() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_home())
}

fn render_home() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Reservations</title>
</head>
<body>
{crumbs}
<h1>Reservations</h1>
<nav>
<a href="/reservations/new">Start a new reservation</a>
<a href="/reservations">View all reservations</a>
</nav>
</body>
</html>
"#,
        crumbs = breadcrumb(&["Home"])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_offers_both_navigation_actions() {
        let html = render_home();
        assert!(html.contains(r#"href="/reservations/new""#));
        assert!(html.contains(r#"href="/reservations""#));
    }
}
