use configuration::Locale;

/// Every piece of display text the reporter prints, for one language.
#[derive(Debug)]
pub struct Labels {
    pub task: &'static str,
    pub error: &'static str,

    // Record fields
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub cash: &'static str,
    pub category: &'static str,
    pub product_name: &'static str,
    pub price: &'static str,
    pub quantity: &'static str,
    pub basket_total: &'static str,
    pub units: &'static str,

    // Task titles
    pub customer_details: &'static str,
    pub top_spender: &'static str,
    pub most_expensive_product: &'static str,
    pub average_product_price: &'static str,
    pub line_item_average: &'static str,
    pub lowest_spender: &'static str,
    pub best_selling_category: &'static str,
    pub sold_extremes: &'static str,
    pub top_line_item_customer: &'static str,
    pub most_sold_product: &'static str,
    pub average_spending: &'static str,
    pub most_profitable_category: &'static str,
    pub most_expensive_purchases: &'static str,
    pub most_expensive_categories: &'static str,
    pub sold_quantities: &'static str,

    // Result lines
    pub total_cash: &'static str,
    pub total_spent: &'static str,
    pub most_sold: &'static str,
    pub least_sold: &'static str,
    pub total_line_items: &'static str,
    pub top_spending_customer: &'static str,
    pub total_profit: &'static str,
    pub most_expensive_purchase_of: &'static str,
    pub most_expensive_category_of: &'static str,
    pub amount_in_category: &'static str,
    pub total_sold: &'static str,

    // Absent results
    pub customer_not_found: &'static str,
    pub product_not_found: &'static str,
    pub category_not_found: &'static str,
    pub sold_products_not_found: &'static str,
    pub purchase_not_found: &'static str,
    pub spending_category_not_found: &'static str,
}

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &EN,
        Locale::Tr => &TR,
    }
}

static EN: Labels = Labels {
    task: "Task",
    error: "Error",

    first_name: "Name",
    last_name: "Last Name",
    cash: "Customer Cash",
    category: "Category",
    product_name: "Product name",
    price: "Price",
    quantity: "Quantity",
    basket_total: "Total Basket Amount",
    units: "units",

    customer_details: "All customers and the total amount spent",
    top_spender: "Top spending customer",
    most_expensive_product: "Most expensive product",
    average_product_price: "Average price of all products",
    line_item_average: "Average product quantity per customer",
    lowest_spender: "Customer with the least total purchase amount",
    best_selling_category: "Best-selling category",
    sold_extremes: "Most and least sold products",
    top_line_item_customer: "Customer with the most products purchased",
    most_sold_product: "Most sold product among sold products",
    average_spending: "Average total spending per customer",
    most_profitable_category: "Most profitable category",
    most_expensive_purchases: "Most expensive purchase of each customer",
    most_expensive_categories: "Category each customer spent the most on",
    sold_quantities: "Total quantity sold for each product",

    total_cash: "Total Customer Cash",
    total_spent: "Total Amount Spent",
    most_sold: "Most sold product",
    least_sold: "Least sold product",
    total_line_items: "Total number of products purchased",
    top_spending_customer: "Top Spending Customer",
    total_profit: "Total Profit",
    most_expensive_purchase_of: "Most Expensive Purchase",
    most_expensive_category_of: "Most Expensive Category",
    amount_in_category: "Total amount spent in this category",
    total_sold: "Total Quantity of Sold Products",

    customer_not_found: "Customer not found.",
    product_not_found: "Product not found.",
    category_not_found: "Category not found.",
    sold_products_not_found: "Sold products not found.",
    purchase_not_found: "Purchase Not Found.",
    spending_category_not_found: "Spending Category Not Found.",
};

static TR: Labels = Labels {
    task: "Görev",
    error: "Hata",

    first_name: "Ad",
    last_name: "Soyad",
    cash: "Müşteri Nakdi",
    category: "Kategori",
    product_name: "Ürün adı",
    price: "Fiyat",
    quantity: "Adet",
    basket_total: "Toplam Sepet Tutarı",
    units: "adet",

    customer_details: "Tüm müşteriler ve toplam harcama",
    top_spender: "En çok harcama yapan müşteri",
    most_expensive_product: "En pahalı ürün",
    average_product_price: "Tüm ürünlerin ortalama fiyatı",
    line_item_average: "Müşteri başına ortalama ürün adedi",
    lowest_spender: "En az harcama yapan müşteri",
    best_selling_category: "En çok satan ürün kategorisi",
    sold_extremes: "En çok ve en az satılan ürünler",
    top_line_item_customer: "En çok ürün satın alan müşteri",
    most_sold_product: "Satılan ürünler arasında en çok satılan ürün",
    average_spending: "Müşteri başına ortalama toplam harcama",
    most_profitable_category: "En kârlı kategori",
    most_expensive_purchases: "Her müşterinin en pahalı alışverişi",
    most_expensive_categories: "Her müşterinin en çok harcadığı kategori",
    sold_quantities: "Her ürün için satılan toplam adet",

    total_cash: "Toplam Müşteri Nakdi",
    total_spent: "Toplam Harcanan Tutar",
    most_sold: "En çok satılan ürün",
    least_sold: "En az satılan ürün",
    total_line_items: "Satın alınan toplam ürün sayısı",
    top_spending_customer: "En Çok Harcama Yapan Müşteri",
    total_profit: "Toplam Kâr",
    most_expensive_purchase_of: "En Pahalı Alışverişi",
    most_expensive_category_of: "En Çok Harcama Yaptığı Kategori",
    amount_in_category: "Bu kategoride harcanan toplam tutar",
    total_sold: "Satılan Ürünlerin Toplam Adedi",

    customer_not_found: "Müşteri bulunamadı.",
    product_not_found: "Ürün bulunamadı.",
    category_not_found: "Kategori bulunamadı.",
    sold_products_not_found: "Satılan ürün bulunamadı.",
    purchase_not_found: "Alışveriş bulunamadı.",
    spending_category_not_found: "Harcama kategorisi bulunamadı.",
};
