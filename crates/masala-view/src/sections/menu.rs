//! Menu section and category tab renderers.

use masala_commerce::menu::{CategoryTabs, Menu, MenuFilter, MenuItem};

use crate::html_escape;

/// Render the items of `menu` visible under `filter`.
pub fn render_menu(menu: &Menu, filter: &MenuFilter) -> String {
    let items: Vec<String> = menu.filter(filter).map(render_menu_item).collect();

    let items_html = if items.is_empty() {
        r#"<p class="menu-empty">No dishes in this category yet.</p>"#.to_string()
    } else {
        items.join("\n")
    };

    format!(
        r#"<section class="menu-grid" data-section="menu" data-filter="{filter}">
    {items}
</section>"#,
        filter = html_escape(filter.slug()),
        items = items_html
    )
}

fn render_menu_item(item: &MenuItem) -> String {
    let name = html_escape(&item.name);
    let price = html_escape(&item.price.display());
    let image = item.image.as_deref().map(html_escape);

    let image_html = image
        .as_ref()
        .map(|src| {
            format!(
                r#"<div class="menu-item-image"><img src="{}" alt="{}" loading="lazy"></div>"#,
                src, name
            )
        })
        .unwrap_or_default();

    let description = item
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="menu-item-description">{}</p>"#, html_escape(d)))
        .unwrap_or_default();

    format!(
        r#"<div class="menu-item" data-category="{category}">
        {image_html}
        <div class="menu-item-content">
            <h3 class="menu-item-name">{name}</h3>
            {description}
            <span class="menu-item-price">{price}</span>
            <button class="add-to-cart" data-name="{name}" data-price="{price}" data-image="{image}">Add to Cart</button>
        </div>
    </div>"#,
        category = html_escape(&item.category),
        image_html = image_html,
        name = name,
        description = description,
        price = price,
        image = image.unwrap_or_default()
    )
}

/// Render the category filter buttons, marking the active tab.
pub fn render_category_tabs(menu: &Menu, tabs: &CategoryTabs) -> String {
    let buttons: String = tabs
        .slugs()
        .iter()
        .map(|slug| {
            let label = if slug == "all" { "All" } else { menu.label(slug) };
            let active = if tabs.is_active(slug) { " active" } else { "" };
            format!(
                r#"<button class="filter-btn{}" data-filter="{}">{}</button>"#,
                active,
                html_escape(slug),
                html_escape(label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<nav class="menu-filters" data-section="filters">
    {}
</nav>"#,
        buttons
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use masala_commerce::menu::MenuCategory;
    use masala_commerce::money::{Currency, Money};

    fn menu() -> Menu {
        let price = |n| Money::from_major(n, Currency::INR);
        Menu::new(
            vec![
                MenuCategory::new("starters", "Starters"),
                MenuCategory::new("drinks", "Drinks"),
            ],
            vec![
                MenuItem::new("Paneer Tikka", price(250), "starters")
                    .with_image("../images/tikka.jpg")
                    .with_description("Cottage cheese & peppers"),
                MenuItem::new("Lassi", price(80), "drinks"),
            ],
        )
    }

    #[test]
    fn test_render_all() {
        let html = render_menu(&menu(), &MenuFilter::All);
        assert!(html.contains(r#"data-filter="all""#));
        assert!(html.contains(r#"<div class="menu-item" data-category="starters">"#));
        assert!(html.contains(r#"<div class="menu-item" data-category="drinks">"#));
        assert!(html.contains(
            r#"data-name="Paneer Tikka" data-price="₹250.00" data-image="../images/tikka.jpg""#
        ));
        assert!(html.contains(r#"data-name="Lassi" data-price="₹80.00" data-image="""#));
        assert!(html.contains("Cottage cheese &amp; peppers"));
    }

    #[test]
    fn test_render_category() {
        let html = render_menu(&menu(), &MenuFilter::parse("drinks"));
        assert!(html.contains("Lassi"));
        assert!(!html.contains("Paneer Tikka"));
    }

    #[test]
    fn test_render_empty_category() {
        let html = render_menu(&menu(), &MenuFilter::parse("desserts"));
        assert!(html.contains("menu-empty"));
    }

    #[test]
    fn test_tabs_mark_active() {
        let menu = menu();
        let mut tabs = menu.tabs();

        let html = render_category_tabs(&menu, &tabs);
        assert!(html.contains(r#"<button class="filter-btn active" data-filter="all">All</button>"#));
        assert!(html.contains(r#"<button class="filter-btn" data-filter="drinks">Drinks</button>"#));

        assert!(tabs.select("drinks"));
        let html = render_category_tabs(&menu, &tabs);
        assert!(html.contains(r#"<button class="filter-btn" data-filter="all">All</button>"#));
        assert!(html.contains(r#"<button class="filter-btn active" data-filter="drinks">Drinks</button>"#));
    }
}
