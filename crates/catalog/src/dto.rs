use super::*;
use serde::Deserialize;
use serde::Serialize;
use sf_core::ID;
use sf_core::Unique;

#[derive(Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub image_urls: Option<Vec<String>>,
    pub category_id: Option<String>,
}

impl CreateProductRequest {
    /// All-or-nothing validation matching the create contract: every field
    /// except the image list is required.
    pub fn build(self) -> Result<Product, CatalogError> {
        let (Some(name), Some(description), Some(price), Some(stock), Some(category)) = (
            self.name,
            self.description,
            self.price,
            self.stock_quantity,
            self.category_id,
        ) else {
            return Err(CatalogError::Validation(
                "Missing required product fields (name, description, price, stockQuantity, categoryId)",
            ));
        };
        let category = ID::parse(&category)
            .ok_or(CatalogError::Validation("Invalid categoryId"))?;
        Ok(Product::new(
            ID::default(),
            name,
            description,
            price,
            stock,
            self.image_urls.unwrap_or_default(),
            category,
        ))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub image_urls: Option<Vec<String>>,
    pub category_id: Option<String>,
}

impl UpdateProductRequest {
    /// Merges only the provided fields onto the stored product. An update
    /// carrying no fields at all is a validation error.
    pub fn apply(self, product: Product) -> Result<Product, CatalogError> {
        if self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_quantity.is_none()
            && self.image_urls.is_none()
            && self.category_id.is_none()
        {
            return Err(CatalogError::Validation(
                "No valid fields provided for update.",
            ));
        }
        let category = match self.category_id {
            Some(raw) => {
                ID::parse(&raw).ok_or(CatalogError::Validation("Invalid categoryId"))?
            }
            None => product.category(),
        };
        Ok(Product::new(
            product.id(),
            self.name.unwrap_or_else(|| product.name().to_string()),
            self.description
                .unwrap_or_else(|| product.description().to_string()),
            self.price.unwrap_or(product.price()),
            self.stock_quantity.unwrap_or(product.stock_quantity()),
            self.image_urls.unwrap_or_else(|| product.image_urls().to_vec()),
            category,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub image_urls: Vec<String>,
    pub category_id: String,
    pub category: CategoryView,
}

impl From<(&Product, &Category)> for ProductView {
    fn from((product, category): (&Product, &Category)) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price(),
            stock_quantity: product.stock_quantity(),
            image_urls: product.image_urls().to_vec(),
            category_id: product.category().to_string(),
            category: CategoryView::from(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> Category {
        Category::new(ID::default(), "Tools".into(), None)
    }

    fn create_request(category: &Category) -> CreateProductRequest {
        CreateProductRequest {
            name: Some("Hammer".into()),
            description: Some("A hammer".into()),
            price: Some(9.99),
            stock_quantity: Some(3),
            image_urls: None,
            category_id: Some(category.id().to_string()),
        }
    }

    #[test]
    fn create_requires_all_fields() {
        let category = category();
        let mut req = create_request(&category);
        req.price = None;
        assert!(matches!(
            req.build(),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn create_defaults_image_urls_to_empty() {
        let category = category();
        let product = create_request(&category).build().unwrap();
        assert!(product.image_urls().is_empty());
        assert_eq!(product.category(), category.id());
    }

    #[test]
    fn create_rejects_malformed_category_id() {
        let category = category();
        let mut req = create_request(&category);
        req.category_id = Some("42".into());
        assert!(matches!(req.build(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let product = create_request(&category()).build().unwrap();
        let update = UpdateProductRequest {
            name: None,
            description: None,
            price: Some(4.99),
            stock_quantity: None,
            image_urls: None,
            category_id: None,
        };
        let updated = update.apply(product.clone()).unwrap();
        assert_eq!(updated.price(), 4.99);
        assert_eq!(updated.name(), product.name());
        assert_eq!(updated.id(), product.id());
        assert_eq!(updated.category(), product.category());
    }

    #[test]
    fn empty_update_is_rejected() {
        let product = create_request(&category()).build().unwrap();
        let update = UpdateProductRequest {
            name: None,
            description: None,
            price: None,
            stock_quantity: None,
            image_urls: None,
            category_id: None,
        };
        assert!(matches!(
            update.apply(product),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn views_use_camel_case_wire_names() {
        let category = category();
        let product = create_request(&category).build().unwrap();
        let json = serde_json::to_value(ProductView::from((&product, &category))).unwrap();
        assert!(json.get("stockQuantity").is_some());
        assert!(json.get("imageUrls").is_some());
        assert!(json.get("categoryId").is_some());
        assert!(json.get("category").is_some());
    }
}
