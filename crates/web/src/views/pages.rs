use discover_products::{Listing, Product};

use super::{escape, layout, safe_href, Banner};

/// Catalog home page: search/sort controls, an optional banner, and rows.
///
/// `search` echoes the submitted term back into the search box.
pub fn index(banner: Option<Banner>, listing: &Listing, search: Option<&str>) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        r#"<section class="controls">
<form class="search-form" action="/search_products" method="POST">
<input type="text" name="search_query" placeholder="Search products" value="{}">
<button type="submit">Search</button>
</form>
<form class="sort-form" action="/sort_products" method="POST">
<button type="submit">Sort A-Z</button>
</form>
</section>
"#,
        escape(search.unwrap_or_default())
    ));

    if let Some(banner) = banner {
        body.push_str(&banner.render());
        body.push('\n');
    }

    let products = listing.products();
    if !products.is_empty() {
        body.push_str("<ul class=\"products\">\n");
        for product in products {
            body.push_str(&product_card(product));
        }
        body.push_str("</ul>\n");
    }

    layout("Home", &body)
}

fn product_card(product: &Product) -> String {
    let name = escape(product.name());
    let title = match safe_href(product.url()) {
        Some(href) => format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{name}</a>"#),
        None => name.clone(),
    };
    let image = product
        .image()
        .and_then(safe_href)
        .map(|src| format!(r#"<img class="product-image" src="{src}" alt="{name}">"#))
        .unwrap_or_default();

    format!(
        r#"<li class="product" data-id="{id}">
{image}<h3 class="product-name">{title}</h3>
<p class="product-desc">{desc}</p>
</li>
"#,
        id = product.id(),
        desc = escape(product.description()),
    )
}

pub fn about() -> String {
    layout(
        "About",
        r#"<section class="about">
<h2>About</h2>
<p>Discover&amp;Share is a community catalog of useful products and tools.
Browse what others have found, search by name, or sort the list alphabetically.</p>
<p>Found something worth sharing? Add it from the Submit page.</p>
</section>
"#,
    )
}

pub fn contact() -> String {
    layout(
        "Contact",
        r#"<section class="contact">
<h2>Contact</h2>
<form class="contact-form">
<input class="contact-inputs" type="text" name="name" placeholder="Name">
<input class="contact-inputs" type="email" name="email" placeholder="Email">
<textarea class="contact-inputs" name="message" placeholder="Message"></textarea>
<p class="err-msg err-msg-hidden">Please fill in all of the fields.</p>
<button class="contact-submit" type="submit">Send</button>
</form>
</section>
"#,
    )
}

/// Product submission form, with the outcome banner of a previous attempt.
pub fn submit(banner: Option<Banner>) -> String {
    let banner = banner.map(|b| b.render()).unwrap_or_default();
    layout(
        "Submit",
        &format!(
            r#"<section class="submit">
<h2>Submit a product</h2>
{banner}
<form action="/add_product" method="POST">
<input type="text" name="name" placeholder="Product name" maxlength="100" required>
<input type="url" name="url" placeholder="Product URL" maxlength="150" required>
<textarea name="description" placeholder="Description" maxlength="300" required></textarea>
<input type="url" name="img_url" placeholder="Image URL (optional)" maxlength="250">
<button type="submit">Submit</button>
</form>
</section>
"#
        ),
    )
}

pub fn not_found() -> String {
    layout(
        "Not Found",
        r#"<section class="not-found">
<h2>404</h2>
<p>The page you are looking for does not exist.</p>
<p><a href="/">Back to the catalog</a></p>
</section>
"#,
    )
}
