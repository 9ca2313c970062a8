//! Demo seed data
//!
//! Optional fixtures applied at startup when the config asks for them,
//! so a fresh deployment has something to list and search.

use super::id::IdGenerator;
use super::product::Product;
use super::user::User;

/// Five demo users.
pub fn users(ids: &dyn IdGenerator) -> Vec<User> {
    [("Peter", 16.0), ("Ivan", 18.0), ("Daria", 20.0), ("Maria", 22.0), ("Alex", 25.0)]
        .into_iter()
        .map(|(name, age)| User {
            id: ids.generate(),
            name: name.to_string(),
            age,
        })
        .collect()
}

/// Twelve demo products across four categories.
pub fn products(ids: &dyn IdGenerator) -> Vec<Product> {
    let rows: [(&str, &str, &str, f64, f64); 12] = [
        (
            "ASUS ROG laptop",
            "Electronics",
            "Gaming laptop, RTX 4060, 16GB RAM, 512GB SSD",
            120000.0,
            5.0,
        ),
        (
            "iPhone 15",
            "Electronics",
            "128GB, black, A16 Bionic",
            89990.0,
            10.0,
        ),
        (
            "Sony WH-1000XM5 headphones",
            "Accessories",
            "Wireless, active noise cancelling",
            29990.0,
            7.0,
        ),
        (
            "JavaScript for Kids",
            "Books",
            "Programming basics, 288 pages",
            1200.0,
            15.0,
        ),
        (
            "Xiaomi Mi Band 8",
            "Electronics",
            "Black, AMOLED display, heart-rate sensor",
            3990.0,
            20.0,
        ),
        (
            "Laptop backpack",
            "Accessories",
            "Waterproof, 15.6\", grey",
            4500.0,
            8.0,
        ),
        (
            "DeLonghi coffee maker",
            "Home",
            "Drip, 1.25l, timer",
            6990.0,
            3.0,
        ),
        (
            "LG 27\" 4K monitor",
            "Electronics",
            "IPS, HDR10, USB-C",
            32990.0,
            4.0,
        ),
        (
            "Logitech MX Keys keyboard",
            "Accessories",
            "Wireless, backlit, Mac/Windows",
            11990.0,
            6.0,
        ),
        (
            "Razer DeathAdder V2 mouse",
            "Accessories",
            "Gaming, wired, 20000 DPI",
            5490.0,
            12.0,
        ),
        (
            "Samsung T7 1TB external SSD",
            "Electronics",
            "USB 3.2, 1050MB/s, metal case",
            8990.0,
            9.0,
        ),
        (
            "iPhone 15 case",
            "Accessories",
            "Silicone, clear, MagSafe",
            1290.0,
            25.0,
        ),
    ];

    rows.into_iter()
        .map(|(name, category, description, price, stock)| Product {
            id: ids.generate(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
            stock,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::id::SequentialId;

    #[test]
    fn test_seed_sizes_and_distinct_ids() {
        let ids = SequentialId::new();
        let users = users(&ids);
        let products = products(&ids);
        assert_eq!(users.len(), 5);
        assert_eq!(products.len(), 12);
        assert_eq!(users[0].id, "id1");
        assert_eq!(products[0].id, "id6");
    }
}
