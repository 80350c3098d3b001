//! CLI presentation layer for the storefront.
//!
//! Renders catalog, cart, and receipt state fetched from the server. The only
//! logic here is client-side form validation (required fields, email shape);
//! everything else is a request/response call.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use uuid::Uuid;

use storefront::models::{CartLine, Product, Receipt};
use storefront::web::extractors::SESSION_HEADER;

#[derive(Parser, Debug)]
#[command(name = "storefront-client", about = "Browse the catalog, manage a cart, and check out.")]
struct Cli {
  /// Base URL of the storefront server.
  #[arg(long, env = "STOREFRONT_URL", default_value = "http://127.0.0.1:8080")]
  base_url: String,

  /// Cart-session identifier. Generated (and printed) when absent; reuse it
  /// across invocations to keep working with the same cart.
  #[arg(long, env = "STOREFRONT_SESSION")]
  session: Option<Uuid>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List all catalog products.
  Products,
  /// Show a single product.
  Product { id: Uuid },
  /// One-time catalog seed.
  Seed,
  /// Show the cart with its running total.
  Cart,
  /// Add a product to the cart.
  Add {
    product_id: Uuid,
    #[arg(default_value_t = 1)]
    quantity: u32,
  },
  /// Set a cart line's quantity.
  Update { line_id: Uuid, quantity: u32 },
  /// Remove a cart line.
  Remove { line_id: Uuid },
  /// Clear the whole cart.
  Clear,
  /// Check out the cart and print the receipt.
  Checkout {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
  },
}

// Response envelopes, mirroring the server's JSON shapes.

#[derive(Deserialize, Debug)]
struct Envelope<T> {
  success: bool,
  message: Option<String>,
  data: Option<T>,
  count: Option<usize>,
  total: Option<String>,
}

struct Client {
  http: reqwest::Client,
  base_url: String,
  session: Uuid,
}

impl Client {
  async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
    let resp = self
      .http
      .get(format!("{}{}", self.base_url, path))
      .header(SESSION_HEADER, self.session.to_string())
      .send()
      .await
      .context("request failed; is the server running?")?;
    decode(resp).await
  }

  async fn send<T: serde::de::DeserializeOwned>(
    &self,
    method: reqwest::Method,
    path: &str,
    body: Option<serde_json::Value>,
  ) -> Result<Envelope<T>> {
    let mut req = self
      .http
      .request(method, format!("{}{}", self.base_url, path))
      .header(SESSION_HEADER, self.session.to_string());
    if let Some(body) = body {
      req = req.json(&body);
    }
    let resp = req.send().await.context("request failed; is the server running?")?;
    decode(resp).await
  }
}

async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<Envelope<T>> {
  let status = resp.status();
  let envelope: Envelope<T> = resp.json().await.context("malformed response body")?;
  if !envelope.success {
    bail!(
      "{} ({})",
      envelope.message.unwrap_or_else(|| "request failed".to_string()),
      status
    );
  }
  Ok(envelope)
}

/// Mirrors the checkout form's client-side validation: required fields and a
/// loose email-shape check. The server re-validates regardless.
fn validate_checkout_form(name: &str, email: &str) -> Result<()> {
  if name.trim().is_empty() {
    bail!("Name is required");
  }
  if email.trim().is_empty() {
    bail!("Email is required");
  }
  let shape_ok = {
    let mut parts = email.split('@');
    matches!(
      (parts.next(), parts.next(), parts.next()),
      (Some(local), Some(domain), None)
        if !local.is_empty() && domain.contains('.') && !email.contains(' ')
    )
  };
  if !shape_ok {
    bail!("Email is invalid");
  }
  Ok(())
}

fn print_product(p: &Product) {
  println!("{}  {}", p.id, p.name);
  println!("    {} | {} in stock | {}", p.category, p.stock, p.price);
  println!("    {}", p.description);
}

fn print_cart_line(l: &CartLine) {
  println!("{}  {} x{}  @ {}", l.id, l.name, l.quantity, l.price);
}

fn print_receipt(r: &Receipt) {
  println!("=== {} ===", r.message);
  println!("Order:    {}", r.order_number);
  println!("Customer: {} <{}>", r.customer_name, r.customer_email);
  println!("Placed:   {}", r.timestamp);
  println!("Status:   {}", r.status);
  println!("Items:");
  for item in &r.items {
    print_cart_line(item);
  }
  println!("Subtotal: {}", r.subtotal);
  println!("Tax:      {}", r.tax);
  println!("Total:    {}", r.total);
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let session = cli.session.unwrap_or_else(|| {
    let fresh = Uuid::new_v4();
    eprintln!("(new session {fresh}; pass --session {fresh} to keep this cart)");
    fresh
  });

  let client = Client {
    http: reqwest::Client::new(),
    base_url: cli.base_url.trim_end_matches('/').to_string(),
    session,
  };

  match cli.command {
    Command::Products => {
      let envelope: Envelope<Vec<Product>> = client.get("/api/products").await?;
      for product in envelope.data.unwrap_or_default() {
        print_product(&product);
      }
      println!("({} products)", envelope.count.unwrap_or(0));
    }
    Command::Product { id } => {
      let envelope: Envelope<Product> = client.get(&format!("/api/products/{id}")).await?;
      if let Some(product) = envelope.data {
        print_product(&product);
      }
    }
    Command::Seed => {
      let envelope: Envelope<Vec<Product>> =
        client.send(reqwest::Method::POST, "/api/products/initialize", None).await?;
      println!("Seeded {} products.", envelope.count.unwrap_or(0));
    }
    Command::Cart => {
      let envelope: Envelope<Vec<CartLine>> = client.get("/api/cart").await?;
      let lines = envelope.data.unwrap_or_default();
      if lines.is_empty() {
        println!("Your cart is empty.");
      } else {
        for line in &lines {
          print_cart_line(line);
        }
        println!("Total: {}", envelope.total.unwrap_or_default());
      }
    }
    Command::Add { product_id, quantity } => {
      let envelope: Envelope<CartLine> = client
        .send(
          reqwest::Method::POST,
          "/api/cart",
          Some(serde_json::json!({ "productId": product_id, "quantity": quantity })),
        )
        .await?;
      println!("{}", envelope.message.unwrap_or_default());
      if let Some(line) = envelope.data {
        print_cart_line(&line);
      }
    }
    Command::Update { line_id, quantity } => {
      let envelope: Envelope<CartLine> = client
        .send(
          reqwest::Method::PUT,
          &format!("/api/cart/{line_id}"),
          Some(serde_json::json!({ "quantity": quantity })),
        )
        .await?;
      if let Some(line) = envelope.data {
        print_cart_line(&line);
      }
    }
    Command::Remove { line_id } => {
      let envelope: Envelope<()> = client
        .send(reqwest::Method::DELETE, &format!("/api/cart/{line_id}"), None)
        .await?;
      println!("{}", envelope.message.unwrap_or_default());
    }
    Command::Clear => {
      let envelope: Envelope<()> = client.send(reqwest::Method::DELETE, "/api/cart", None).await?;
      println!("{}", envelope.message.unwrap_or_default());
    }
    Command::Checkout { name, email } => {
      validate_checkout_form(&name, &email)?;
      let envelope: Envelope<Receipt> = client
        .send(
          reqwest::Method::POST,
          "/api/checkout",
          Some(serde_json::json!({ "name": name, "email": email })),
        )
        .await?;
      if let Some(receipt) = envelope.data {
        print_receipt(&receipt);
      }
    }
  }

  Ok(())
}
