use crate::HarnessError;
use crate::models::Order;
use crate::request::RequestSpec;

/// `POST /store/order`
pub fn place_order(order: &Order) -> Result<RequestSpec, HarnessError> {
    RequestSpec::post("/store/order").json(order)
}

/// `GET /store/order/{orderId}`
pub fn get_order(order_id: i64) -> RequestSpec {
    RequestSpec::get("/store/order/{orderId}").path_param("orderId", order_id)
}

/// `DELETE /store/order/{orderId}`
pub fn delete_order(order_id: i64) -> RequestSpec {
    RequestSpec::delete("/store/order/{orderId}").path_param("orderId", order_id)
}
