//! Schema and data migrations

use super::{Script, ScriptKind, Step};
use crate::db::schema;

pub const CREATE_GALLERY_TABLES: Script = Script {
    name: "create-gallery-tables",
    kind: ScriptKind::Migration,
    description: "Create gallery_albums and gallery_items",
    steps: &[
        Step::Execute(schema::CREATE_GALLERY_ALBUMS),
        Step::Execute(schema::CREATE_GALLERY_ITEMS),
        Step::Execute(schema::CREATE_GALLERY_ALBUMS_ORDER_INDEX),
        Step::Execute(schema::CREATE_GALLERY_ITEMS_ALBUM_INDEX),
        Step::Query(
            "SELECT (SELECT COUNT(*) FROM gallery_albums) AS albums,
                    (SELECT COUNT(*) FROM gallery_items) AS items",
        ),
    ],
};

pub const ADD_CUSTOMER_ACTIVE_FLAG: Script = Script {
    name: "add-customer-active-flag",
    kind: ScriptKind::Migration,
    description: "Add is_active to customers and b2b_customers",
    steps: &[
        Step::Execute("ALTER TABLE customers ADD COLUMN IF NOT EXISTS is_active BOOLEAN DEFAULT true"),
        Step::Execute("UPDATE customers SET is_active = true WHERE is_active IS NULL"),
        Step::Execute(
            "ALTER TABLE b2b_customers ADD COLUMN IF NOT EXISTS is_active BOOLEAN DEFAULT true",
        ),
        Step::Execute("UPDATE b2b_customers SET is_active = true WHERE is_active IS NULL"),
        Step::Query(
            "SELECT 'customers' AS source, COUNT(*) FILTER (WHERE is_active) AS active, COUNT(*) AS total
             FROM customers
             UNION ALL
             SELECT 'b2b_customers', COUNT(*) FILTER (WHERE is_active), COUNT(*)
             FROM b2b_customers",
        ),
    ],
};

pub const CREATE_ACTIVITY_LOGS: Script = Script {
    name: "create-activity-logs",
    kind: ScriptKind::Migration,
    description: "Create the activity_logs audit table",
    steps: &[
        Step::Execute(schema::CREATE_ACTIVITY_LOGS),
        Step::Execute(schema::CREATE_ACTIVITY_LOGS_CUSTOMER_INDEX),
        Step::Execute(schema::CREATE_ACTIVITY_LOGS_ORDER_INDEX),
        Step::Execute(schema::CREATE_ACTIVITY_LOGS_CREATED_INDEX),
        Step::Query(
            "SELECT column_name, data_type, is_nullable
             FROM information_schema.columns
             WHERE table_name = 'activity_logs'
             ORDER BY ordinal_position",
        ),
    ],
};

pub const LINK_PRODUCTS_TO_COLLECTIONS: Script = Script {
    name: "link-products-to-collections",
    kind: ScriptKind::Migration,
    description: "Add products.parent_collection_id for the inventory hierarchy",
    steps: &[
        Step::Execute(
            "ALTER TABLE products ADD COLUMN IF NOT EXISTS parent_collection_id INTEGER
             REFERENCES parent_collections(id) ON DELETE SET NULL",
        ),
        Step::Execute(
            "CREATE INDEX IF NOT EXISTS idx_products_parent_collection_id
             ON products(parent_collection_id)",
        ),
        Step::Query(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE parent_collection_id IS NULL) AS unassigned
             FROM products",
        ),
    ],
};

pub const SEED_ADMIN_PERMISSIONS: Script = Script {
    name: "seed-admin-permissions",
    kind: ScriptKind::Migration,
    description: "Seed back office permissions and grant them to the admin role",
    steps: &[
        Step::Execute(
            "INSERT INTO roles (name, description)
             VALUES ('admin', 'Full back office access')
             ON CONFLICT (name) DO NOTHING",
        ),
        Step::Execute(
            "INSERT INTO permissions (name, description) VALUES
                ('gallery.manage', 'Create, edit and delete gallery albums and items'),
                ('inventory.view', 'View the collection and product hierarchy'),
                ('customers.manage', 'View customers and change their status'),
                ('orders.view', 'View orders'),
                ('activity_logs.view', 'View the admin activity feed'),
                ('cms.manage', 'Edit CMS pages')
             ON CONFLICT (name) DO NOTHING",
        ),
        Step::Execute(
            "INSERT INTO role_permissions (role_id, permission_id)
             SELECT r.id, p.id
             FROM roles r
             CROSS JOIN permissions p
             WHERE r.name = 'admin'
             ON CONFLICT DO NOTHING",
        ),
        Step::Query(
            "SELECT r.name AS role, COUNT(rp.permission_id) AS permissions
             FROM roles r
             LEFT JOIN role_permissions rp ON rp.role_id = r.id
             GROUP BY r.name
             ORDER BY r.name",
        ),
    ],
};

pub const ADD_CMS_PAGE_SEO: Script = Script {
    name: "add-cms-page-seo",
    kind: ScriptKind::Migration,
    description: "Add SEO metadata columns to cms_pages",
    steps: &[
        Step::Execute("ALTER TABLE cms_pages ADD COLUMN IF NOT EXISTS meta_title VARCHAR(255)"),
        Step::Execute("ALTER TABLE cms_pages ADD COLUMN IF NOT EXISTS meta_description TEXT"),
        Step::Execute("UPDATE cms_pages SET meta_title = LEFT(title, 255) WHERE meta_title IS NULL"),
        Step::Query(
            "SELECT id, slug, title, meta_title
             FROM cms_pages
             ORDER BY id",
        ),
    ],
};
