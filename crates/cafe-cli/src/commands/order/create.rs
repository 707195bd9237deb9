use cafe_core::entities::NewOrder;
use cafe_core::enums::{OrderType, PaymentMethod};
use chrono::{DateTime, Utc};

use super::OrderDetailResponse;
use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_cart, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub employee: i64,
    pub customer: Option<i64>,
    pub order_type: &'a str,
    pub payment: &'a str,
    pub date: Option<DateTime<Utc>>,
    pub items: &'a [String],
}

pub async fn run(params: Params<'_>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = build_new_order(&params)?;
    let (order, lines) = ctx.service.create_order(new).await?;
    output(&OrderDetailResponse { order, lines }, flags.format)
}

fn build_new_order(params: &Params<'_>) -> anyhow::Result<NewOrder> {
    Ok(NewOrder {
        customer_id: params.customer,
        employee_id: params.employee,
        order_type: parse_enum::<OrderType>(params.order_type, "order type")?,
        payment_method: parse_enum::<PaymentMethod>(params.payment, "payment method")?,
        order_date: params.date,
        lines: parse_cart(params.items)?,
    })
}

#[cfg(test)]
mod tests {
    use cafe_core::entities::CartLine;
    use cafe_core::enums::{OrderType, PaymentMethod};
    use pretty_assertions::assert_eq;

    use super::{Params, build_new_order};

    fn params<'a>(order_type: &'a str, items: &'a [String]) -> Params<'a> {
        Params {
            employee: 2,
            customer: None,
            order_type,
            payment: "cash",
            date: None,
            items,
        }
    }

    #[test]
    fn builds_cart_and_enums() {
        let items = vec!["5:2".to_string(), "6:1".to_string()];
        let new = build_new_order(&params("takeaway", &items)).expect("should build");

        assert_eq!(new.order_type, OrderType::Takeaway);
        assert_eq!(new.payment_method, PaymentMethod::Cash);
        assert_eq!(new.lines, vec![CartLine::new(5, 2), CartLine::new(6, 1)]);
    }

    #[test]
    fn rejects_unknown_order_type() {
        let items = vec!["5:2".to_string()];
        let err = build_new_order(&params("delivery", &items)).expect_err("should fail");
        assert!(err.to_string().contains("invalid order type 'delivery'"));
    }
}
