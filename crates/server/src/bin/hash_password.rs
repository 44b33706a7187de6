//! Print an argon2 hash for seeding `users.password_hash`.

fn main() {
    let password = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "staffpass123".to_string());
    match server::auth::password::hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("Failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
