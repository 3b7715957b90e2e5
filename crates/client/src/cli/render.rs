use std::{io, ops::Range};

use heirloom::{
    cart::Cart,
    orders::Order,
    pricing::{self, DEFAULT_CURRENCY},
    products::Product,
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

fn price(amount: u64, currency: &str) -> String {
    pricing::to_money(amount, currency)
        .map_or_else(|_| format!("{amount} {currency}"), |money| money.to_string())
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    money_columns: Columns<Range<usize>>,
) -> io::Result<()> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(money_columns, Alignment::right());

    writeln!(out, "{table}")
}

pub(super) fn line(mut out: impl io::Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
}

pub(super) fn products(mut out: impl io::Write, products: &[Product]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Era", "Condition", "Price", ""]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.era.clone(),
            product.condition.clone(),
            price(product.price, DEFAULT_CURRENCY),
            if product.featured { "★" } else { "" }.to_string(),
        ]);
    }

    write_table(&mut out, builder, Columns::new(4..5))
}

pub(super) fn product(mut out: impl io::Write, product: &Product) -> io::Result<()> {
    writeln!(out, "{}", product.name)?;
    writeln!(out, "  id:        {}", product.id)?;
    writeln!(out, "  price:     {}", price(product.price, DEFAULT_CURRENCY))?;
    writeln!(out, "  category:  {}", product.category)?;
    writeln!(out, "  era:       {}", product.era)?;
    writeln!(out, "  condition: {}", product.condition)?;
    writeln!(out, "  material:  {}", product.material)?;

    for image in &product.images {
        writeln!(out, "  image:     {image}")?;
    }

    Ok(())
}

pub(super) fn cart(mut out: impl io::Write, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "cart is empty");
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Era", "Qty", "Price", "Subtotal"]);

    for line in cart.iter() {
        builder.push_record([
            line.product().name.clone(),
            line.product().era.clone(),
            line.quantity().to_string(),
            price(line.product().price, cart.currency()),
            price(line.subtotal(), cart.currency()),
        ]);
    }

    write_table(&mut out, builder, Columns::new(2..5))?;

    writeln!(out, "Total: {}", price(cart.total(), cart.currency()))
}

pub(super) fn order(mut out: impl io::Write, order: &Order) -> io::Result<()> {
    writeln!(out, "order {} is {}", order.id, order.status)?;
    writeln!(out, "  placed:  {}", order.created_at)?;
    writeln!(out, "  items:   {}", order.items.len())?;
    writeln!(out, "  total:   {}", price(order.total, DEFAULT_CURRENCY))
}
