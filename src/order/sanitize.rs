use mongodb::bson::{Bson, Document};

/// Coerces a line-item document into shapes the storage attribute format is
/// guaranteed to hold, regardless of how the document was assembled:
/// non-string names and ids become null, non-numeric quantities and amounts
/// become zero, and nested documents under any other key become null.
pub fn sanitize_line_item(line_item: &mut Document) {
    let keys: Vec<String> = line_item.keys().cloned().collect();
    for key in keys {
        let value = match line_item.get(&key) {
            Some(value) => value.clone(),
            None => continue,
        };

        let sanitized = match key.as_str() {
            "product_id" | "product_name" => sanitize_string(value),
            "quantity" => sanitize_integer(value),
            "price_per_unit" | "subtotal" => sanitize_number(value),
            _ => sanitize_scalar(value),
        };

        line_item.insert(key, sanitized);
    }
}

fn sanitize_string(value: Bson) -> Bson {
    match value {
        Bson::String(_) | Bson::Null => value,
        _ => Bson::Null,
    }
}

fn sanitize_integer(value: Bson) -> Bson {
    match value {
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) => value,
        Bson::String(text) => match text.parse::<i64>() {
            Ok(quantity) => Bson::Int64(quantity),
            Err(_) => Bson::Int32(0),
        },
        _ => Bson::Int32(0),
    }
}

fn sanitize_number(value: Bson) -> Bson {
    match value {
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) => value,
        Bson::String(text) => match text.parse::<f64>() {
            Ok(amount) => Bson::Double(amount),
            Err(_) => Bson::Double(0.0),
        },
        _ => Bson::Double(0.0),
    }
}

fn sanitize_scalar(value: Bson) -> Bson {
    match value {
        Bson::Document(_) => Bson::Null,
        _ => value,
    }
}
