//! Lay out a composed diagram from a JSON request body.
//!
//! Run with: RUST_LOG=braidweave=debug cargo run --example render_request

use braidweave_layout::{BuildRequest, LayoutError};
use tracing_subscriber::EnvFilter;

const BODY: &str = r#"{
    "morphisms": {
        "f": {"name": "f", "input": ["foo"], "output": ["a", "b", "c", "d"]},
        "g": {"name": "g", "input": ["a", "b", "e"], "output": ["bar"]}
    },
    "compose": ["f", "g"],
    "scale": 80
}"#;

fn main() -> Result<(), LayoutError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let request = BuildRequest::from_json(BODY)?;
    let chain = request.build()?;
    println!("{}\n", chain.linear_syntax());

    let layout = request.layout()?;
    println!("grid size: {:?}", layout.size);
    for (id, node) in &layout.nodes {
        println!("  {id:<40} x = {:>4.1}  width = {}", node.position.x, node.width);
    }

    let grid = request.array()?;
    for row in grid.to_rows() {
        let cells: Vec<String> = row.iter().map(|c| format!("{:>9}", c)).collect();
        println!("{}", cells.join(" "));
    }

    println!("\n{}", serde_json::to_string_pretty(&request.vis()?)?);
    Ok(())
}
