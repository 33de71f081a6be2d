// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Executive Partners

use execpartners_seo::app::{create_router, VERSION};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = create_router();

    // Bind to 0.0.0.0 to accept connections from any network interface (required for Docker)
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("execpartners-seo v{} listening on {}", VERSION, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
