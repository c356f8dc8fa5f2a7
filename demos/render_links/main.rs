//! Render the links of a few entities from a YAML schema configuration
//!
//! Run with `RUST_LOG=debug` to see the resolution steps.

use hypermedia::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
resources:
  - name: order
    schema:
      type: object
      required: [id, customer_id]
      properties:
        id: { type: string, format: uuid }
        customer_id: { type: integer }
        coupon: { type: [string, "null"] }
      links:
        - relation: self
          href: /orders/{id}
          method: GET
        - relation: customer
          href: /customers/{Customer_Id}
          method: GET
        - relation: cancel
          href: /orders/{id}/cancel
          method: POST
"#;

hypermedia_entity!(Order, {
    id: Uuid,
    customer_id: i64,
    coupon: Option<String>,
});

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = HypermediaConfig::from_yaml_str(CONFIG)?;
    let registry = SchemaRegistry::new(&config);

    let order = Order::new(Uuid::new_v4(), 1017, None);
    let resource = LinkedResource::from_registry(&registry, "order", order)?;
    println!("{}", serde_json::to_string_pretty(&resource)?);

    let broken = serde_json::json!({ "id": "not-a-uuid", "customer_id": 3 });
    match registry.links_for("order", &broken) {
        Ok(links) => println!("unexpected links: {:?}", links),
        Err(e) => println!("{} ({})", e, e.error_code()),
    }

    Ok(())
}
