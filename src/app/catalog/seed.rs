//! 启动时载入的示例产品

use super::model::Product;

const SAMPLE_PRODUCTS: [(&str, &str, f64, bool); 10] = [
    ("Laptop", "Electronics", 7999.99, true),
    ("Smartphone", "Electronics", 5999.49, false),
    ("Running Shoes", "Footwear", 2999.99, true),
    ("Sandals", "Footwear", 1499.95, false),
    ("T-Shirt", "Clothing", 999.49, true),
    ("Jeans", "Clothing", 1999.99, true),
    ("JavaScript Guide", "Books", 499.99, false),
    ("Python for Beginners", "Books", 599.99, true),
    ("Microwave Oven", "Home Appliances", 4599.95, false),
    ("Air Conditioner", "Home Appliances", 24999.99, true),
];

/// 生成 id 为 "1".."10" 的示例数据
pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .iter()
        .enumerate()
        .map(|(index, &(title, category, price, in_stock))| Product {
            id: (index + 1).to_string(),
            title: title.to_string(),
            category: category.to_string(),
            price,
            in_stock,
        })
        .collect()
}
