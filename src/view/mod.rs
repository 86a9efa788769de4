// View rendering, split by surface
mod breadcrumb;
mod modals;
mod sidebar;
