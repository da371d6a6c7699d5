//! Cross-crate workflow test support.
//!
//! Builds one consistent dashboard data set (fields, drones, tasks, billing
//! schedules, invoices and payments) so tests can drive every engine over
//! the same inputs, the way the dashboard pages do.

use anyhow::{anyhow, Result};
use billing_engine::models::{BillingSchedule, CreateBillingSchedule, Frequency};
use chrono::{DateTime, NaiveDate, Utc};
use domain_core::config::Config;
use domain_core::{Calendar, DomainContext};
use field_operations::models::{
    AreaUnit, ClientRef, CreateDrone, CreateField, CreateTask, Drone, DroneStatus, Field,
    Priority, Recurrence, Task, TaskStatus, TaskType,
};
use invoicing_engine::models::{
    CreateInvoice, CreatePayment, Invoice, InvoiceItem, InvoiceStatus, Payment, PaymentMethod,
};
use rust_decimal::Decimal;
use std::sync::Once;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once), at the configured log level.
pub fn init_tracing() {
    INIT.call_once(|| {
        let config = Config::load().unwrap_or_default();
        domain_core::observability::init_tracing("workflow-tests", &config.log_level);
    });
}

pub const KOVACEVIC: &str = "Farmer Emir Kovačević";
pub const HODZIC: &str = "Farmer Amira Hodžić";

/// The fixed instant every workflow is evaluated at: Thursday 15 May 2025,
/// 11:00 in Sarajevo.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_747_299_600, 0).unwrap_or_default()
}

fn instant(s: &str) -> Result<DateTime<Utc>> {
    s.parse().map_err(|e| anyhow!("bad instant '{}': {}", s, e))
}

fn day(s: &str) -> Result<NaiveDate> {
    s.parse().map_err(|e| anyhow!("bad date '{}': {}", s, e))
}

fn dec(s: &str) -> Result<Decimal> {
    s.parse().map_err(|e| anyhow!("bad decimal '{}': {}", s, e))
}

/// A seeded dashboard evaluated in the Europe/Sarajevo calendar.
pub struct WorkflowTestContext {
    pub ctx: DomainContext,
    pub now: DateTime<Utc>,
    pub fields: Vec<Field>,
    pub drones: Vec<Drone>,
    pub tasks: Vec<Task>,
    pub schedules: Vec<BillingSchedule>,
    pub invoices: Vec<Invoice>,
    pub payments: Vec<Payment>,
}

impl WorkflowTestContext {
    pub fn new() -> Result<Self> {
        init_tracing();

        let ctx = DomainContext {
            calendar: Calendar::from_name("Europe/Sarajevo")?,
            ..DomainContext::default()
        };

        let fields = seed_fields()?;
        let drones = seed_drones()?;
        let tasks = seed_tasks(&fields, &drones)?;
        let schedules = seed_schedules(&fields)?;
        let (invoices, payments) = seed_invoices(&ctx)?;

        Ok(Self {
            ctx,
            now: now(),
            fields,
            drones,
            tasks,
            schedules,
            invoices,
            payments,
        })
    }

    pub fn field(&self, name: &str) -> Result<&Field> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| anyhow!("no field named '{}'", name))
    }

    pub fn drone(&self, name: &str) -> Result<&Drone> {
        self.drones
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| anyhow!("no drone named '{}'", name))
    }

    pub fn invoice(&self, number: &str) -> Result<&Invoice> {
        self.invoices
            .iter()
            .find(|i| i.invoice_number() == number)
            .ok_or_else(|| anyhow!("no invoice numbered '{}'", number))
    }
}

fn field(name: &str, crop: &str, dunums: &str, client: &str) -> Result<Field> {
    Ok(Field::try_new(CreateField {
        name: name.to_string(),
        area: dec(dunums)?,
        area_unit: AreaUnit::Dunum,
        crop_type: crop.to_string(),
        last_operation_date: None,
        tasks_pending: 1,
        client: ClientRef {
            name: client.to_string(),
            phone: None,
        },
    })?)
}

fn seed_fields() -> Result<Vec<Field>> {
    Ok(vec![
        field("North Wheat Field", "Wheat", "45", KOVACEVIC)?,
        field("South Corn Field", "Corn", "30", HODZIC)?,
        field("East Soybean Field", "Soybeans", "25", KOVACEVIC)?,
    ])
}

fn drone(name: &str, model: &str, status: DroneStatus, next_maintenance: &str) -> Result<Drone> {
    Ok(Drone::try_new(CreateDrone {
        name: name.to_string(),
        model: model.to_string(),
        status,
        battery: 90,
        last_maintenance_date: instant("2025-04-01T08:00:00Z")?,
        next_maintenance_date: instant(next_maintenance)?,
        flight_hours: 210.0,
    })?)
}

fn seed_drones() -> Result<Vec<Drone>> {
    Ok(vec![
        drone("AgriDrone X1", "DJI Agras T30", DroneStatus::Available, "2025-06-20T08:00:00Z")?,
        drone("AgriDrone X2", "DJI Agras T40", DroneStatus::InUse, "2025-05-18T08:00:00Z")?,
        drone("SeedMaster 3", "XAG P100", DroneStatus::Maintenance, "2025-05-10T08:00:00Z")?,
    ])
}

struct TaskSeed<'a> {
    title: &'a str,
    task_type: TaskType,
    field: &'a Field,
    drone: &'a Drone,
    scheduled: &'a str,
    status: TaskStatus,
    completed: Option<(&'a str, &'a str)>,
}

fn task(seed: TaskSeed<'_>) -> Result<Task> {
    let (completed_date, area_completed) = match seed.completed {
        Some((at, area)) => (Some(instant(at)?), Some(dec(area)?)),
        None => (None, None),
    };
    Ok(Task::try_new(CreateTask {
        title: seed.title.to_string(),
        task_type: seed.task_type,
        field_id: seed.field.id,
        field_name: seed.field.name.clone(),
        drone_id: seed.drone.id,
        drone_name: seed.drone.name.clone(),
        scheduled_date: instant(seed.scheduled)?,
        status: seed.status,
        priority: Priority::Medium,
        recurrence: Recurrence::None,
        completed_date,
        area_completed,
        notes: None,
    })?)
}

fn seed_tasks(fields: &[Field], drones: &[Drone]) -> Result<Vec<Task>> {
    let (north, south, east) = (&fields[0], &fields[1], &fields[2]);
    let (x1, x2) = (&drones[0], &drones[1]);
    Ok(vec![
        task(TaskSeed {
            title: "Spray North Wheat Field",
            task_type: TaskType::Spraying,
            field: north,
            drone: x1,
            scheduled: "2025-05-16T05:00:00Z",
            status: TaskStatus::Planned,
            completed: None,
        })?,
        task(TaskSeed {
            title: "Scout South Corn Field",
            task_type: TaskType::Scouting,
            field: south,
            drone: x2,
            scheduled: "2025-05-15T04:00:00Z",
            status: TaskStatus::Progress,
            completed: None,
        })?,
        task(TaskSeed {
            title: "Seed East Soybean Field",
            task_type: TaskType::Seeding,
            field: east,
            drone: x1,
            scheduled: "2025-05-08T05:00:00Z",
            status: TaskStatus::Completed,
            completed: Some(("2025-05-08T09:00:00Z", "25")),
        })?,
        task(TaskSeed {
            title: "Border spray North Wheat Field",
            task_type: TaskType::Border,
            field: north,
            drone: x2,
            scheduled: "2025-05-28T05:00:00Z",
            status: TaskStatus::Planned,
            completed: None,
        })?,
    ])
}

fn schedule(
    service: &str,
    field: &Field,
    frequency: Frequency,
    amount: i64,
    next: &str,
    active: bool,
) -> Result<BillingSchedule> {
    Ok(BillingSchedule::try_new(CreateBillingSchedule {
        client_id: Uuid::new_v4(),
        client_name: field.client.name.clone(),
        field_id: field.id,
        field_name: field.name.clone(),
        service_name: service.to_string(),
        frequency,
        amount: Decimal::from(amount),
        next_billing_date: instant(next)?,
        active,
    })?)
}

fn seed_schedules(fields: &[Field]) -> Result<Vec<BillingSchedule>> {
    let (north, south, east) = (&fields[0], &fields[1], &fields[2]);
    Ok(vec![
        schedule("Weekly Disease Monitoring", north, Frequency::Weekly, 500, "2025-05-16T08:00:00Z", true)?,
        schedule("Monthly Crop Spraying", south, Frequency::Monthly, 1200, "2025-05-20T08:00:00Z", true)?,
        schedule("Quarterly Soil Analysis", east, Frequency::Quarterly, 900, "2025-06-10T08:00:00Z", true)?,
        schedule("Harvest Survey", south, Frequency::OneTime, 350, "2025-05-18T08:00:00Z", false)?,
    ])
}

struct InvoiceSeed<'a> {
    number: &'a str,
    client: &'a str,
    issued: &'a str,
    due: &'a str,
    status: InvoiceStatus,
    quantity: &'a str,
    unit_price: &'a str,
}

fn invoice(seed: InvoiceSeed<'_>, ctx: &DomainContext) -> Result<Invoice> {
    Ok(Invoice::try_new(
        CreateInvoice {
            client_id: Uuid::new_v4(),
            client_name: seed.client.to_string(),
            invoice_number: seed.number.to_string(),
            issue_date: day(seed.issued)?,
            due_date: day(seed.due)?,
            status: seed.status,
            items: vec![InvoiceItem::new(
                "Drone service",
                dec(seed.quantity)?,
                dec(seed.unit_price)?,
            )],
            tax_rate: dec("17")?,
            stated_total: None,
            notes: None,
        },
        ctx.money,
    )?)
}

pub fn payment_for(invoice: &Invoice, on: &str, amount: &str) -> Result<Payment> {
    Ok(Payment::try_new(CreatePayment {
        invoice_id: invoice.id(),
        invoice_number: invoice.invoice_number().to_string(),
        client_name: invoice.client_name().to_string(),
        date: day(on)?,
        amount: dec(amount)?,
        method: PaymentMethod::BankTransfer,
        reference: None,
        notes: None,
    })?)
}

/// Six invoices covering every aging state as of [`now`], plus two payments.
fn seed_invoices(ctx: &DomainContext) -> Result<(Vec<Invoice>, Vec<Payment>)> {
    let seeds = [
        // 1000 + 17% = 1170, settled.
        ("INV-2025-001", KOVACEVIC, "2025-04-01", "2025-04-15", InvoiceStatus::Paid, "2", "500"),
        // 750 + 17% = 877.50, part paid and ten days late.
        ("INV-2025-002", HODZIC, "2025-04-20", "2025-05-05", InvoiceStatus::Sent, "30", "25"),
        // 702, due today.
        ("INV-2025-003", KOVACEVIC, "2025-05-01", "2025-05-15", InvoiceStatus::Sent, "1", "600"),
        // 351.
        ("INV-2025-004", HODZIC, "2025-05-10", "2025-05-30", InvoiceStatus::Draft, "1", "300"),
        // 234.
        ("INV-2025-005", HODZIC, "2025-04-25", "2025-05-10", InvoiceStatus::Cancelled, "1", "200"),
        // 468, due in 17 days.
        ("INV-2025-006", KOVACEVIC, "2025-05-12", "2025-06-01", InvoiceStatus::Sent, "1", "400"),
    ];

    let invoices = seeds
        .iter()
        .map(|(number, client, issued, due, status, quantity, unit_price)| {
            invoice(
                InvoiceSeed {
                    number,
                    client,
                    issued,
                    due,
                    status: *status,
                    quantity,
                    unit_price,
                },
                ctx,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let payments = vec![
        payment_for(&invoices[0], "2025-04-10", "1170")?,
        payment_for(&invoices[1], "2025-05-02", "400")?,
    ];
    Ok((invoices, payments))
}
