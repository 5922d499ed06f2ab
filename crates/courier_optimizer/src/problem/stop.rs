use fxhash::FxHashMap;

/// A single delivery order as it arrives in the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_no: String,
    pub task_no: String,
    pub address_no: String,
    pub point: geo::Point,
    pub weight: f64,
    pub cubic: f64,
}

/// Customer node of the route: every order delivered at the same address.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    address_no: String,
    point: geo::Point,
    order_nos: Vec<String>,
    task_nos: Vec<String>,
}

impl Stop {
    pub fn address_no(&self) -> &str {
        &self.address_no
    }

    pub fn point(&self) -> geo::Point {
        self.point
    }

    pub fn order_nos(&self) -> &[String] {
        &self.order_nos
    }

    pub fn task_nos(&self) -> &[String] {
        &self.task_nos
    }

    /// `;`-separated order numbers, as the dispatch report expects them.
    pub fn joined_order_nos(&self) -> String {
        self.order_nos.join(";")
    }

    pub fn joined_task_nos(&self) -> String {
        self.task_nos.join(";")
    }

    /// `"lon,lat"`
    pub fn lon_lat(&self) -> String {
        format!("{},{}", self.point.x(), self.point.y())
    }
}

/// Groups orders by address. A stop keeps the position of the first order
/// seen at its address and the coordinate of the last one.
pub fn group_orders(orders: &[Order]) -> Vec<Stop> {
    let mut stops: Vec<Stop> = Vec::new();
    let mut position_by_address: FxHashMap<&str, usize> = FxHashMap::default();

    for order in orders {
        match position_by_address.get(order.address_no.as_str()) {
            Some(&position) => {
                let stop = &mut stops[position];
                stop.point = order.point;
                stop.order_nos.push(order.order_no.clone());
                stop.task_nos.push(order.task_no.clone());
            }
            None => {
                position_by_address.insert(&order.address_no, stops.len());
                stops.push(Stop {
                    address_no: order.address_no.clone(),
                    point: order.point,
                    order_nos: vec![order.order_no.clone()],
                    task_nos: vec![order.task_no.clone()],
                });
            }
        }
    }

    stops
}
