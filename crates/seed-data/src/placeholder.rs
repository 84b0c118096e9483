//! Fixed placeholder dataset for the dashboard.
//!
//! These are the demo rows shown by the dashboard frontend. User passwords
//! are stored here in plaintext and hashed at insert time by the seeder.

use time::{Date, macros::date};
use uuid::{Uuid, uuid};

/// A user row before password hashing.
#[derive(Debug, Clone, Copy)]
pub struct UserSeed {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CustomerSeed {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: Option<&'static str>,
}

/// An invoice row. The id is generated by the database at insert time.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceSeed {
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: &'static str,
    pub date: Date,
}

#[derive(Debug, Clone, Copy)]
pub struct RevenueSeed {
    pub month: &'static str,
    pub revenue: i32,
}

pub const USERS: [UserSeed; 1] = [UserSeed {
    id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
}];

pub const CUSTOMERS: [CustomerSeed; 6] = [
    CustomerSeed {
        id: uuid!("d6e15727-9fe1-426c-a2f9-45577593c62f"),
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: Some("/customers/evil-rabbit.png"),
    },
    CustomerSeed {
        id: uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a"),
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: Some("/customers/delba-de-oliveira.png"),
    },
    CustomerSeed {
        id: uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a"),
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: Some("/customers/lee-robinson.png"),
    },
    CustomerSeed {
        id: uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2"),
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: Some("/customers/michael-novotny.png"),
    },
    CustomerSeed {
        id: uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9"),
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: Some("/customers/amy-burns.png"),
    },
    CustomerSeed {
        id: uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb"),
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: Some("/customers/balazs-orban.png"),
    },
];

pub const INVOICES: [InvoiceSeed; 13] = [
    InvoiceSeed {
        customer_id: CUSTOMERS[0].id,
        amount: 15795,
        status: "pending",
        date: date!(2022 - 12 - 06),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[1].id,
        amount: 20348,
        status: "pending",
        date: date!(2022 - 11 - 14),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[4].id,
        amount: 3040,
        status: "paid",
        date: date!(2022 - 10 - 29),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[3].id,
        amount: 44800,
        status: "paid",
        date: date!(2023 - 09 - 10),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[5].id,
        amount: 34577,
        status: "pending",
        date: date!(2023 - 08 - 05),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[2].id,
        amount: 54246,
        status: "pending",
        date: date!(2023 - 07 - 16),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[0].id,
        amount: 666,
        status: "pending",
        date: date!(2023 - 06 - 27),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[3].id,
        amount: 32545,
        status: "paid",
        date: date!(2023 - 06 - 09),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[4].id,
        amount: 1250,
        status: "paid",
        date: date!(2023 - 06 - 17),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[5].id,
        amount: 8546,
        status: "paid",
        date: date!(2023 - 06 - 07),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[1].id,
        amount: 500,
        status: "paid",
        date: date!(2023 - 08 - 19),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[5].id,
        amount: 8945,
        status: "paid",
        date: date!(2023 - 06 - 03),
    },
    InvoiceSeed {
        customer_id: CUSTOMERS[2].id,
        amount: 1000,
        status: "paid",
        date: date!(2022 - 06 - 05),
    },
];

pub const REVENUE: [RevenueSeed; 12] = [
    RevenueSeed {
        month: "Jan",
        revenue: 2000,
    },
    RevenueSeed {
        month: "Feb",
        revenue: 1800,
    },
    RevenueSeed {
        month: "Mar",
        revenue: 2200,
    },
    RevenueSeed {
        month: "Apr",
        revenue: 2500,
    },
    RevenueSeed {
        month: "May",
        revenue: 2300,
    },
    RevenueSeed {
        month: "Jun",
        revenue: 3200,
    },
    RevenueSeed {
        month: "Jul",
        revenue: 3500,
    },
    RevenueSeed {
        month: "Aug",
        revenue: 3700,
    },
    RevenueSeed {
        month: "Sep",
        revenue: 2500,
    },
    RevenueSeed {
        month: "Oct",
        revenue: 2800,
    },
    RevenueSeed {
        month: "Nov",
        revenue: 3000,
    },
    RevenueSeed {
        month: "Dec",
        revenue: 4800,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn user_and_customer_ids_are_unique() {
        let ids: HashSet<Uuid> = USERS
            .iter()
            .map(|u| u.id)
            .chain(CUSTOMERS.iter().map(|c| c.id))
            .collect();
        assert_eq!(ids.len(), USERS.len() + CUSTOMERS.len());
    }

    #[test]
    fn emails_are_unique() {
        let emails: HashSet<&str> = USERS
            .iter()
            .map(|u| u.email)
            .chain(CUSTOMERS.iter().map(|c| c.email))
            .collect();
        assert_eq!(emails.len(), USERS.len() + CUSTOMERS.len());
    }

    #[test]
    fn invoices_reference_known_customers() {
        let customer_ids: HashSet<Uuid> = CUSTOMERS.iter().map(|c| c.id).collect();
        for invoice in &INVOICES {
            assert!(customer_ids.contains(&invoice.customer_id));
        }
    }

    #[test]
    fn invoice_amounts_are_positive() {
        for invoice in &INVOICES {
            assert!(invoice.amount > 0);
        }
    }

    #[test]
    fn invoice_statuses_are_known() {
        for invoice in &INVOICES {
            assert!(invoice.status == "pending" || invoice.status == "paid");
        }
    }

    #[test]
    fn revenue_covers_twelve_unique_months() {
        let months: HashSet<&str> = REVENUE.iter().map(|r| r.month).collect();
        assert_eq!(months.len(), 12);
    }
}
