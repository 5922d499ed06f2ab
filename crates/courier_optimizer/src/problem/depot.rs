/// Warehouse every route leaves from and returns to.
#[derive(Debug, Clone, PartialEq)]
pub struct Depot {
    address_no: String,
    name: Option<String>,
    code: Option<String>,
    point: geo::Point,
}

impl Depot {
    pub fn new(address_no: impl Into<String>, point: geo::Point) -> Self {
        Self {
            address_no: address_no.into(),
            name: None,
            code: None,
            point,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn address_no(&self) -> &str {
        &self.address_no
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn point(&self) -> geo::Point {
        self.point
    }
}
