//! Read-only checks against the live database

use super::{Script, ScriptKind, Step};

pub const CHECK_CUSTOMERS: Script = Script {
    name: "check-customers",
    kind: ScriptKind::Diagnostic,
    description: "Customer counts per type and segment",
    steps: &[
        Step::Query(
            "SELECT ct.id, ct.name AS customer_type,
                    COUNT(c.id) AS customers,
                    COUNT(c.id) FILTER (WHERE c.is_active) AS active
             FROM customer_types ct
             LEFT JOIN customers c ON c.customer_type_id = ct.id
             GROUP BY ct.id, ct.name
             ORDER BY ct.id",
        ),
        Step::Query(
            "SELECT 'retail' AS segment, COUNT(*) AS total FROM customers
             UNION ALL
             SELECT 'b2b', COUNT(*) FROM b2b_customers",
        ),
        Step::Query(
            "SELECT COUNT(*) AS customers_without_type
             FROM customers
             WHERE customer_type_id IS NULL",
        ),
    ],
};

pub const CHECK_ORDERS: Script = Script {
    name: "check-orders",
    kind: ScriptKind::Diagnostic,
    description: "Latest orders and status breakdown",
    steps: &[
        Step::Query(
            "SELECT o.id, o.status, o.total_amount::text AS total_amount,
                    c.name AS customer, o.created_at
             FROM orders o
             LEFT JOIN customers c ON c.id = o.customer_id
             ORDER BY o.created_at DESC
             LIMIT 20",
        ),
        Step::Query(
            "SELECT status, COUNT(*) AS orders
             FROM orders
             GROUP BY status
             ORDER BY orders DESC",
        ),
    ],
};

pub const CHECK_ADMIN_USERS: Script = Script {
    name: "check-admin-users",
    kind: ScriptKind::Diagnostic,
    description: "Users with their role and permission count",
    steps: &[Step::Query(
        "SELECT u.id, u.email, r.name AS role, COUNT(rp.permission_id) AS permissions
         FROM users u
         LEFT JOIN roles r ON r.id = u.role_id
         LEFT JOIN role_permissions rp ON rp.role_id = r.id
         GROUP BY u.id, u.email, r.name
         ORDER BY u.id",
    )],
};
