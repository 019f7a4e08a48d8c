use crate::utils::error::{DeliveryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// 一筆已出貨的訂單，建立後不可變
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order {
    item: String,
}

impl Order {
    pub fn new(item: impl Into<String>) -> Self {
        Self { item: item.into() }
    }

    pub fn item(&self) -> &str {
        &self.item
    }
}

/// Snapshot of an order's delivery progress.
///
/// Every form borrows the order it describes. The set is closed: matches over
/// it are written without a wildcard arm so a new form will not compile until
/// rendering handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderDeliveryState<'a> {
    ReceivedAtDepot {
        depot_name: String,
        order: &'a Order,
    },
    Dispatched {
        truck_id: String,
        driver_name: String,
        order: &'a Order,
    },
    Delivered {
        destination: String,
        is_delivered: bool,
        order: &'a Order,
    },
}

impl<'a> OrderDeliveryState<'a> {
    pub fn received_at_depot(depot_name: impl Into<String>, order: &'a Order) -> Self {
        Self::ReceivedAtDepot {
            depot_name: depot_name.into(),
            order,
        }
    }

    pub fn dispatched(
        truck_id: impl Into<String>,
        driver_name: impl Into<String>,
        order: &'a Order,
    ) -> Self {
        Self::Dispatched {
            truck_id: truck_id.into(),
            driver_name: driver_name.into(),
            order,
        }
    }

    pub fn delivered(destination: impl Into<String>, is_delivered: bool, order: &'a Order) -> Self {
        Self::Delivered {
            destination: destination.into(),
            is_delivered,
            order,
        }
    }

    pub fn order(&self) -> &'a Order {
        match self {
            Self::ReceivedAtDepot { order, .. }
            | Self::Dispatched { order, .. }
            | Self::Delivered { order, .. } => *order,
        }
    }

    pub fn stage(&self) -> DeliveryStage {
        match self {
            Self::ReceivedAtDepot { .. } => DeliveryStage::ReceivedAtDepot,
            Self::Dispatched { .. } => DeliveryStage::Dispatched,
            Self::Delivered { .. } => DeliveryStage::Delivered,
        }
    }

    /// True only once the customer has actually received the order.
    pub fn is_delivered(&self) -> bool {
        match self {
            Self::Delivered { is_delivered, .. } => *is_delivered,
            _ => false,
        }
    }
}

impl fmt::Display for OrderDeliveryState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_status(self))
    }
}

/// 將狀態格式化為一行文字 (純函式)
pub fn render_status(state: &OrderDeliveryState<'_>) -> String {
    match state {
        OrderDeliveryState::ReceivedAtDepot { depot_name, order } => {
            format!("{} is received at {} depot.", order.item(), depot_name)
        }
        OrderDeliveryState::Dispatched {
            truck_id,
            driver_name,
            order,
        } => format!(
            "{} is dispatched, Truck ID is {} and driver is {}",
            order.item(),
            truck_id,
            driver_name
        ),
        OrderDeliveryState::Delivered {
            destination,
            is_delivered,
            order,
        } => format!(
            "{} delivered at {}.\nDelivery to customer = {}.\n",
            order.item(),
            destination,
            is_delivered
        ),
    }
}

/// 輸出一行狀態到指定的 writer
pub fn print_status<W: Write>(state: &OrderDeliveryState<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", render_status(state))
}

/// Tag of an [`OrderDeliveryState`] without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStage {
    ReceivedAtDepot,
    Dispatched,
    Delivered,
}

impl DeliveryStage {
    pub const ALL: [DeliveryStage; 3] = [
        DeliveryStage::ReceivedAtDepot,
        DeliveryStage::Dispatched,
        DeliveryStage::Delivered,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeliveryStage::ReceivedAtDepot => "received_at_depot",
            DeliveryStage::Dispatched => "dispatched",
            DeliveryStage::Delivered => "delivered",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            DeliveryStage::ReceivedAtDepot => "ReceivedAtDepot",
            DeliveryStage::Dispatched => "Dispatched",
            DeliveryStage::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for DeliveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeliveryStage {
    type Err = DeliveryError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.name() == name || stage.variant_name() == name)
            .ok_or_else(|| DeliveryError::UnknownStage {
                name: name.to_string(),
            })
    }
}

/// 旅程檔中的狀態描述，尚未綁定訂單
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageSpec {
    ReceivedAtDepot {
        depot_name: String,
    },
    Dispatched {
        truck_id: String,
        driver_name: String,
    },
    Delivered {
        destination: String,
        is_delivered: bool,
    },
}

impl StageSpec {
    pub fn attach<'a>(&self, order: &'a Order) -> OrderDeliveryState<'a> {
        match self {
            StageSpec::ReceivedAtDepot { depot_name } => {
                OrderDeliveryState::received_at_depot(depot_name.as_str(), order)
            }
            StageSpec::Dispatched {
                truck_id,
                driver_name,
            } => OrderDeliveryState::dispatched(truck_id.as_str(), driver_name.as_str(), order),
            StageSpec::Delivered {
                destination,
                is_delivered,
            } => OrderDeliveryState::delivered(destination.as_str(), *is_delivered, order),
        }
    }

    pub fn stage(&self) -> DeliveryStage {
        match self {
            StageSpec::ReceivedAtDepot { .. } => DeliveryStage::ReceivedAtDepot,
            StageSpec::Dispatched { .. } => DeliveryStage::Dispatched,
            StageSpec::Delivered { .. } => DeliveryStage::Delivered,
        }
    }
}

/// One order together with the states it passes through, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderJourney {
    #[serde(rename = "item")]
    pub order: Order,
    #[serde(default)]
    pub states: Vec<StageSpec>,
}

impl OrderJourney {
    pub fn new(order: Order, states: Vec<StageSpec>) -> Self {
        Self { order, states }
    }

    pub fn delivery_states(&self) -> impl Iterator<Item = OrderDeliveryState<'_>> {
        self.states.iter().map(|spec| spec.attach(&self.order))
    }
}

/// One rendered line in machine-readable form.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRecord<'a> {
    pub item: &'a str,
    pub stage: DeliveryStage,
    pub status: String,
}

impl<'a> From<&OrderDeliveryState<'a>> for StatusRecord<'a> {
    fn from(state: &OrderDeliveryState<'a>) -> Self {
        Self {
            item: state.order().item(),
            stage: state.stage(),
            status: render_status(state),
        }
    }
}
