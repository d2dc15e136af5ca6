//! Print a signed SSO redirect URL.
//!
//! ```shell
//! cargo run --example sso_redirect -- my_company vpsdihgfdso
//! ```

use std::env;

use showcase_core::time::now;
use showcase_core::Result;
use showcase_doyoubuzz::{sso_redirect_url, Params};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let company = args.next().unwrap_or_else(|| "my_company".to_string());
    let sso_secret = args.next().unwrap_or_else(|| "vpsdihgfdso".to_string());

    let attributes = Params::new()
        .with("email", "email@host.tld")
        .with("firstname", "John")
        .with("lastname", "Doe")
        .with("external_id", 12345);

    let url = sso_redirect_url(&company, now().timestamp(), &sso_secret, &attributes)?;
    println!("{url}");
    Ok(())
}
