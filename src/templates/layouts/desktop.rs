use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
              header class="site-header" {
                  h3 { "Listing Finder" }
                  nav {
                      ul {
                          li { a href="/" { "Search" } }
                          li { a href="/api/listings" { "All listings (JSON)" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}

const BASE_CSS: &str = "
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }
.site-header { display: flex; align-items: center; justify-content: space-between; }
.site-header ul { display: flex; gap: 1rem; list-style: none; }
.results { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; }
.card img { width: 100%; border-radius: 6px; }
.tag { display: inline-block; background: #eef2ff; border-radius: 4px; padding: 0 6px; margin: 2px; font-size: 0.85em; }
";
