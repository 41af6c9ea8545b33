use axum::Json;
use serde_json::{json, Value};

/// OpenAPI 3.0 文档 (GET /api-docs/openapi.json)
pub async fn openapi_json() -> Json<Value> {
    Json(document())
}

pub fn document() -> Value {
    let error_body = json!({
        "type": "object",
        "properties": { "message": { "type": "string" } }
    });
    let not_found_body = json!({
        "type": "object",
        "properties": { "error": { "type": "string" } }
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Receipt Processor API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "API to process receipts and calculate points"
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Check the server status",
                    "responses": { "200": { "description": "Server is up and running" } }
                }
            },
            "/receipts/process": {
                "post": {
                    "summary": "Process a receipt and calculate points",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Receipt" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Successfully processed the receipt",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": { "id": { "type": "string", "format": "uuid" } }
                                    }
                                }
                            }
                        },
                        "400": {
                            "description": "Bad request, missing or invalid fields",
                            "content": { "application/json": { "schema": error_body } }
                        }
                    }
                }
            },
            "/receipts/{id}/points": {
                "get": {
                    "summary": "Get points for a specific receipt",
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "description": "The unique ID of the receipt",
                        "schema": { "type": "string" }
                    }],
                    "responses": {
                        "200": {
                            "description": "Successfully retrieved the points for the receipt",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": { "points": { "type": "integer" } }
                                    }
                                }
                            }
                        },
                        "404": {
                            "description": "Receipt not found",
                            "content": { "application/json": { "schema": not_found_body } }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Receipt": {
                    "type": "object",
                    "required": ["retailer", "purchaseDate", "purchaseTime", "items", "total"],
                    "properties": {
                        "retailer": { "type": "string" },
                        "purchaseDate": { "type": "string", "format": "date", "example": "2022-01-01" },
                        "purchaseTime": { "type": "string", "example": "13:01" },
                        "items": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Item" }
                        },
                        "total": { "type": "string", "pattern": "^[+-]?(\\d+(\\.\\d*)?|\\.\\d+)$", "example": "6.49" }
                    }
                },
                "Item": {
                    "type": "object",
                    "required": ["shortDescription", "price"],
                    "properties": {
                        "shortDescription": { "type": "string" },
                        "price": { "type": "string", "example": "6.49" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_receipt_paths() {
        let doc = document();
        assert_eq!(doc["openapi"], "3.0.0");
        assert!(doc["paths"]["/receipts/process"]["post"].is_object());
        assert!(doc["paths"]["/receipts/{id}/points"]["get"].is_object());
    }

    #[test]
    fn test_error_schemas_match_response_bodies() {
        let doc = document();
        let schema = |path: &str, method: &str, status: &str| {
            doc["paths"][path][method]["responses"][status]["content"]["application/json"]["schema"]
                ["properties"]
                .clone()
        };
        assert!(schema("/receipts/process", "post", "400")["message"].is_object());
        assert!(schema("/receipts/{id}/points", "get", "404")["error"].is_object());
        assert!(schema("/receipts/{id}/points", "get", "404")["message"].is_null());
    }
}
