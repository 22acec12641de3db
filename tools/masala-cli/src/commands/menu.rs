//! Menu command.

use anyhow::{bail, Result};
use masala_commerce::menu::{Menu, MenuFilter, MenuItem};
use masala_view::{render_category_tabs, render_menu};
use serde::Serialize;

use super::MenuArgs;
use crate::catalog;
use crate::context::Context;

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let menu = catalog::house_menu()?;
    let mut tabs = menu.tabs();
    if !tabs.select(&MenuFilter::parse(&args.category).to_string()) {
        bail!(
            "Unknown category '{}'. Available: {}",
            args.category,
            tabs.slugs().join(", ")
        );
    }
    let filter = tabs.filter();

    if args.html {
        ctx.output.raw(&render_category_tabs(&menu, &tabs));
        ctx.output.raw(&render_menu(&menu, &filter));
        return Ok(());
    }

    if ctx.output.is_json() {
        let items: Vec<&MenuItem> = menu.filter(&filter).collect();
        ctx.output.json(&MenuReport {
            filter: filter.slug(),
            items,
        });
        return Ok(());
    }

    print_menu(&menu, &filter, ctx);
    Ok(())
}

#[derive(Serialize)]
struct MenuReport<'a> {
    filter: &'a str,
    items: Vec<&'a MenuItem>,
}

fn print_menu(menu: &Menu, filter: &MenuFilter, ctx: &Context) {
    for category in &menu.categories {
        let mut items = menu
            .filter(filter)
            .filter(|item| item.category == category.slug)
            .peekable();
        if items.peek().is_none() {
            continue;
        }

        ctx.output.header(&category.label);
        for item in items {
            ctx.output
                .list_item(&format!("{}  {}", item.name, item.price.display()));
            if let Some(description) = &item.description {
                ctx.output.debug(description);
            }
        }
    }
}
